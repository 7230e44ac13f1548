//! Landing view model
//!
//! Everything the landing page shows is decided here, from the session
//! status alone. The components only turn a [`LandingModel`] into markup.

use super::feature::{FeatureEntry, features};
use super::session::SessionStatus;
use super::stats::{STATS, Stat};

/// Static hero copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary_label: &'static str,
    pub secondary_label: &'static str,
}

pub static HERO: HeroContent = HeroContent {
    badge: "Plateforme Innovante",
    title: "Bienvenue sur SourceDeVie",
    subtitle: "Votre écosystème numérique complet pour le paiement, le shopping, la communication et bien plus encore.",
    primary_label: "Accéder au tableau de bord",
    secondary_label: "En savoir plus",
};

/// What the ready landing page is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingContent {
    pub hero: &'static HeroContent,
    pub features: &'static [FeatureEntry],
    pub stats: &'static [Stat; 3],
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            hero: &HERO,
            features: features(),
            stats: &STATS,
        }
    }
}

/// Render decision for one pass of the landing view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingModel {
    /// Session still loading: placeholder only
    Loading,
    Ready(LandingContent),
}

impl LandingModel {
    /// Pure; the same status always yields an equal model
    #[must_use]
    pub fn for_status(status: &SessionStatus) -> Self {
        if status.is_loading {
            Self::Loading
        } else {
            Self::Ready(LandingContent::default())
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Number of cards the grid renders
    #[must_use]
    pub const fn feature_count(&self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Ready(content) => content.features.len(),
        }
    }
}
