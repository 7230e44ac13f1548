//! Feature entries: the static catalog of linked sub-applications

use crate::error::{Result, UiError};
use crate::router::routes;

use super::colors::Accent;
use super::icon::Icon;

/// One linked sub-application as shown on the landing grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

/// Catalog in grid order
pub static FEATURES: [FeatureEntry; 7] = [
    FeatureEntry {
        name: "SVPay",
        description: "Paiements sécurisés et rapides",
        path: routes::SVPAY,
        icon: Icon::CreditCard,
        accent: Accent::Blue,
    },
    FeatureEntry {
        name: "SVStore",
        description: "Boutique en ligne avec NFTs",
        path: routes::SVSTORE,
        icon: Icon::ShoppingCart,
        accent: Accent::Green,
    },
    FeatureEntry {
        name: "SVChat",
        description: "Chat avec reconnaissance vocale",
        path: routes::SVCHAT,
        icon: Icon::MessageSquare,
        accent: Accent::Purple,
    },
    FeatureEntry {
        name: "SVBrowser",
        description: "Navigateur web intégré",
        path: routes::SVBROWSER,
        icon: Icon::Globe,
        accent: Accent::Orange,
    },
    FeatureEntry {
        name: "SVLink",
        description: "Gestionnaire de signets",
        path: routes::SVLINK,
        icon: Icon::Bookmark,
        accent: Accent::Pink,
    },
    FeatureEntry {
        name: "SVCareers",
        description: "Portail de recrutement",
        path: routes::SVCAREERS,
        icon: Icon::Briefcase,
        accent: Accent::Indigo,
    },
    FeatureEntry {
        name: "SVServices",
        description: "Réservation de services",
        path: routes::SVSERVICES,
        icon: Icon::Calendar,
        accent: Accent::Teal,
    },
];

/// The catalog in declared order
#[must_use]
pub fn features() -> &'static [FeatureEntry] {
    &FEATURES
}

/// Look up the entry whose destination is `path`
///
/// Trailing slashes are ignored, so `/svstore/` resolves like `/svstore`.
///
/// # Errors
/// Returns `UiError::RouteNotFound` when no entry owns the path.
pub fn find_by_path(path: &str) -> Result<&'static FeatureEntry> {
    let normalized = path.trim_end_matches('/');
    FEATURES
        .iter()
        .find(|entry| entry.path == normalized)
        .ok_or_else(|| UiError::RouteNotFound(path.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_catalog_has_seven_entries() {
        assert_eq!(features().len(), 7);
    }

    #[test]
    fn test_find_by_path() {
        let entry = find_by_path("/svchat").unwrap();
        assert_eq!(entry.name, "SVChat");
        assert_eq!(entry.icon, Icon::MessageSquare);
        assert_eq!(entry.accent, Accent::Purple);
    }

    #[test]
    fn test_find_by_path_ignores_trailing_slash() {
        assert_eq!(find_by_path("/svstore/").unwrap().name, "SVStore");
    }

    #[test]
    fn test_find_by_path_unknown() {
        assert_eq!(
            find_by_path("/wallet"),
            Err(UiError::RouteNotFound("/wallet".to_string()))
        );
        assert!(find_by_path("/").is_err());
    }
}
