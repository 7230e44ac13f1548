//! Entry page for a linked sub-application
//!
//! Each sub-application is a separate product; this page is what the
//! landing grid routes to until it is mounted here.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{Card, IconGlyph};
use crate::models::find_by_path;
use crate::router::routes;

#[component]
pub fn SubAppPage() -> impl IntoView {
    let location = use_location();

    move || match find_by_path(&location.pathname.get()) {
        Ok(entry) => view! {
            <div class="sub-app-page container">
                <Card class=entry.accent.css_class() style=entry.accent.css_vars()>
                    <div class="feature-icon">
                        <IconGlyph icon=entry.icon />
                    </div>
                    <h1>{entry.name}</h1>
                    <p>{entry.description}</p>
                </Card>
                <a href=routes::HOME>"Retour à l'accueil"</a>
            </div>
        }
        .into_any(),
        Err(err) => {
            tracing::warn!(%err, "sub-application not resolved");
            view! {
                <div class="sub-app-page container">
                    <p class="error">{err.to_string()}</p>
                    <a href=routes::HOME>"Retour à l'accueil"</a>
                </div>
            }
            .into_any()
        }
    }
}
