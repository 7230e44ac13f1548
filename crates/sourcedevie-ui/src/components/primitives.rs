//! Visual primitives: button, card and badge
//!
//! Presentational only. Behavior is passed in by the caller.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Button look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button<F>(
    #[prop(optional)] variant: ButtonVariant,
    on_click: F,
    children: Children,
) -> impl IntoView
where
    F: FnMut(MouseEvent) + Send + 'static,
{
    view! {
        <button type="button" class=variant.class() on:click=on_click>
            {children()}
        </button>
    }
}

#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {class}") style=style>
            {children()}
        </div>
    }
}

/// Low-emphasis pill label
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! { <span class="badge badge-secondary">{children()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::default().class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
    }

    #[test]
    fn test_components_compile() {
        let _ = Card;
        let _ = Badge;
    }
}
