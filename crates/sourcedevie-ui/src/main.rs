//! WASM entry point for the Leptos CSR app
//!
//! This is the main entry point that Trunk compiles to WASM.
//! It installs logging and mounts the App component to the document body.

use leptos::prelude::*;
use sourcedevie_ui::{App, AppConfig, logging};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = logging::init(&config) {
        web_sys::console::error_1(&err.to_string().into());
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting SourceDeVie UI");

    mount_to_body(move || {
        view! {
            <App config=config />
        }
    });
}
