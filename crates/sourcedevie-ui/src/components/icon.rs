//! Inline SVG rendering for [`Icon`]

use leptos::prelude::*;

use crate::models::Icon;

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=icon.label()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
