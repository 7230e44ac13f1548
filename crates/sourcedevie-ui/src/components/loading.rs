use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::models::Icon;

/// Accessible name of the spinner; never rendered as text
pub const LOADING_LABEL: &str = "Chargement…";

/// Shown alone while the session is resolving
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div
            class="loading-placeholder"
            role="status"
            aria-live="polite"
            aria-label=LOADING_LABEL
        >
            <IconGlyph icon=Icon::Loader class="spin" />
        </div>
    }
}
