//! Icon references rendered as inline 24x24 stroke SVGs

/// Named icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    CreditCard,
    ShoppingCart,
    MessageSquare,
    Globe,
    Bookmark,
    Briefcase,
    Calendar,
    ArrowRight,
    Sparkles,
    Loader,
}

impl Icon {
    /// SVG path data (`d` attribute) for a 24x24 viewBox
    pub const fn path(self) -> &'static str {
        match self {
            Self::CreditCard => "M3 4h18a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM1 10h22",
            Self::ShoppingCart => "M9 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2zM20 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2zM1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6",
            Self::MessageSquare => "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            Self::Globe => "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            Self::Bookmark => "M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z",
            Self::Briefcase => "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            Self::Calendar => "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM16 2v4M8 2v4M3 10h18",
            Self::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            Self::Sparkles => "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9zM5 3v4M3 5h4M19 17v4M17 19h4",
            Self::Loader => "M21 12a9 9 0 1 1-6.219-8.56",
        }
    }

    /// Accessible label (French, matching the UI copy)
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Carte bancaire",
            Self::ShoppingCart => "M9 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2zM20 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2zM1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6",
            Self::MessageSquare => "Message",
            Self::Globe => "Globe",
            Self::Bookmark => "Marque-page",
            Self::Briefcase => "Mallette",
            Self::Calendar => "Calendrier",
            Self::ArrowRight => "Flèche",
            Self::Sparkles => "Étincelles",
            Self::Loader => "Chargement",
        }
    }
}
