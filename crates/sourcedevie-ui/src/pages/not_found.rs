//! 404 Not Found page component

use leptos::prelude::*;

use crate::router::routes;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page container">
            <h1>"404 - Page introuvable"</h1>
            <p>"La page que vous cherchez n'existe pas."</p>
            <a href=routes::HOME>"Retour à l'accueil"</a>
        </div>
    }
}
