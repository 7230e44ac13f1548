//! Browser-only checks for landing markup (`wasm-pack test --headless`)

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use leptos::prelude::*;
use leptos_router::components::Router;
use sourcedevie_ui::components::{FeatureGrid, LoadingPlaceholder};
use sourcedevie_ui::models::{FEATURES, features};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn loading_placeholder_is_a_bare_spinner() {
    leptos::mount::mount_to_body(|| view! { <LoadingPlaceholder /> });

    let placeholder = document()
        .query_selector(".loading-placeholder")
        .unwrap()
        .unwrap();
    assert_eq!(
        placeholder.get_attribute("aria-label").as_deref(),
        Some("Chargement…")
    );
    assert!(placeholder.query_selector("svg.spin").unwrap().is_some());
    assert!(!placeholder.text_content().unwrap_or_default().contains("Chargement"));
}

#[wasm_bindgen_test]
fn every_card_ends_with_a_ghost_open_button() {
    leptos::mount::mount_to_body(|| {
        view! {
            <Router>
                <FeatureGrid features=features() />
            </Router>
        }
    });

    let buttons = document()
        .query_selector_all(".feature-card-link .btn-ghost")
        .unwrap();
    assert_eq!(buttons.length() as usize, FEATURES.len());
    let first = buttons.item(0).unwrap();
    assert!(first.text_content().unwrap_or_default().contains("Accéder"));
}
