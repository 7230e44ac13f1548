use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;

use super::icon::IconGlyph;
use super::primitives::{Button, ButtonVariant, Card};
use crate::models::{FeatureEntry, Icon};
use crate::navigation::{LandingAction, dispatch, router_navigator};

/// Grid of feature cards in catalog order
#[component]
pub fn FeatureGrid(features: &'static [FeatureEntry]) -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Nos applications"</h2>
                    <p class="section-description">
                        "Un seul compte pour accéder à tout l'écosystème SourceDeVie."
                    </p>
                </div>
                <div class="features-grid">
                    {features
                        .iter()
                        .map(|entry| view! { <FeatureCard entry=entry /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Label of the ghost button at the bottom of each card
pub const OPEN_LABEL: &str = "Accéder";

/// A clickable card that opens one sub-application
#[component]
pub fn FeatureCard(entry: &'static FeatureEntry) -> impl IntoView {
    let navigator = router_navigator();
    let key_navigator = navigator.clone();

    let on_click = move |_: MouseEvent| {
        dispatch(&navigator, LandingAction::OpenFeature(entry));
    };
    // Enter and Space activate the card like a native link
    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            dispatch(&key_navigator, LandingAction::OpenFeature(entry));
        }
    };

    view! {
        <div
            class="feature-card-link"
            role="link"
            tabindex="0"
            aria-label=entry.name
            on:click=on_click
            on:keydown=on_keydown
        >
            <Card class=entry.accent.css_class() style=entry.accent.css_vars()>
                <div class="feature-icon">
                    <IconGlyph icon=entry.icon />
                </div>
                <h3 class="feature-title">{entry.name}</h3>
                <p class="feature-description">{entry.description}</p>
                // No handler of its own: the click bubbles to the card
                <Button variant=ButtonVariant::Ghost on_click=|_: MouseEvent| {}>
                    {OPEN_LABEL}
                    <IconGlyph icon=Icon::ArrowRight class="btn-icon" />
                </Button>
            </Card>
        </div>
    }
}
