//! Accent color tokens for feature cards

/// RGB color representation (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to hex string (#RRGGBB)
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to CSS rgba() string with the given alpha (clamped to 0..=1)
    pub fn to_css_alpha(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Accent token attached to a feature entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Indigo,
    Teal,
}

impl Accent {
    /// Token name as used in CSS class names
    pub const fn token(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Teal => "teal",
        }
    }

    /// `accent-<token>` class applied to the card
    pub fn css_class(self) -> String {
        format!("accent-{}", self.token())
    }

    /// Inline style exposing the accent as CSS custom properties
    pub fn css_vars(self) -> String {
        let color = get_accent_color(self);
        format!(
            "--accent: {}; --accent-soft: {};",
            color.to_hex(),
            color.to_css_alpha(0.12)
        )
    }
}

/// Map an accent token to its color
///
/// Pure function - always returns same color for same token.
pub const fn get_accent_color(accent: Accent) -> RgbColor {
    match accent {
        Accent::Blue => RgbColor::new(59, 130, 246),
        Accent::Green => RgbColor::new(34, 197, 94),
        Accent::Purple => RgbColor::new(168, 85, 247),
        Accent::Orange => RgbColor::new(249, 115, 22),
        Accent::Pink => RgbColor::new(236, 72, 153),
        Accent::Indigo => RgbColor::new(99, 102, 241),
        Accent::Teal => RgbColor::new(20, 184, 166),
    }
}
