use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::icon::IconGlyph;
use super::primitives::{Badge, Button, ButtonVariant};
use crate::models::{HeroContent, Icon};
use crate::navigation::{LandingAction, dispatch, router_navigator};

/// Hero banner with the two calls to action
#[component]
pub fn Hero(hero: &'static HeroContent) -> impl IntoView {
    let navigator = router_navigator();
    let secondary_navigator = navigator.clone();

    let on_primary = move |_: MouseEvent| {
        dispatch(&navigator, LandingAction::PrimaryCta);
    };
    let on_secondary = move |_: MouseEvent| {
        dispatch(&secondary_navigator, LandingAction::SecondaryCta);
    };

    view! {
        <section class="hero">
            <div class="container hero-content">
                <Badge>
                    <IconGlyph icon=Icon::Sparkles class="badge-icon" />
                    {hero.badge}
                </Badge>
                <h1 class="hero-title">{hero.title}</h1>
                <p class="hero-subtitle">{hero.subtitle}</p>
                <div class="hero-actions">
                    <Button variant=ButtonVariant::Primary on_click=on_primary>
                        {hero.primary_label}
                        <IconGlyph icon=Icon::ArrowRight class="btn-icon" />
                    </Button>
                    <Button variant=ButtonVariant::Outline on_click=on_secondary>
                        {hero.secondary_label}
                    </Button>
                </div>
            </div>
        </section>
    }
}
