//! Navigation requests issued by the landing view
//!
//! Views never call the router directly. They describe the click as a
//! [`LandingAction`] and hand it to a [`Navigator`], which the browser build
//! backs with `leptos_router` and tests back with a recorder.

use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::models::FeatureEntry;
use crate::router::routes;

/// Anything that can change the active view to a path
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Navigator bound to the current `<Router>`
///
/// Must be called inside a component rendered under the router.
pub fn router_navigator() -> impl Navigator + Clone + 'static {
    let navigate = use_navigate();
    move |path: &str| navigate(path, NavigateOptions::default())
}

/// Clickable things on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    /// "Accéder au tableau de bord"
    PrimaryCta,
    /// "En savoir plus" (informational, has no destination)
    SecondaryCta,
    OpenFeature(&'static FeatureEntry),
}

impl LandingAction {
    /// Path this action navigates to, if any
    #[must_use]
    pub const fn destination(&self) -> Option<&'static str> {
        match self {
            Self::PrimaryCta => Some(routes::DASHBOARD),
            Self::SecondaryCta => None,
            Self::OpenFeature(entry) => Some(entry.path),
        }
    }
}

/// Issue the navigation request for `action`
///
/// Exactly one request is sent when the action has a destination and none
/// otherwise. Returns the destination that was requested.
pub fn dispatch<N>(navigator: &N, action: LandingAction) -> Option<&'static str>
where
    N: Navigator + ?Sized,
{
    match action.destination() {
        Some(path) => {
            tracing::info!(?action, path, "navigation requested");
            navigator.navigate(path);
            Some(path)
        }
        None => {
            tracing::debug!(?action, "action has no destination");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::models::FEATURES;

    #[test]
    fn test_primary_cta_goes_to_dashboard() {
        assert_eq!(LandingAction::PrimaryCta.destination(), Some("/dashboard"));
    }

    #[test]
    fn test_secondary_cta_has_no_destination() {
        let calls = RefCell::new(Vec::<String>::new());
        let recorder = |path: &str| calls.borrow_mut().push(path.to_string());

        assert_eq!(dispatch(&recorder, LandingAction::SecondaryCta), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_feature_action_uses_entry_path() {
        let action = LandingAction::OpenFeature(&FEATURES[3]);
        assert_eq!(action.destination(), Some("/svbrowser"));
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let calls = RefCell::new(Vec::<String>::new());
        let recorder = |path: &str| calls.borrow_mut().push(path.to_string());
        let navigator: &dyn Navigator = &recorder;

        assert_eq!(
            dispatch(navigator, LandingAction::PrimaryCta),
            Some("/dashboard")
        );
        assert_eq!(*calls.borrow(), vec!["/dashboard".to_string()]);
    }
}
