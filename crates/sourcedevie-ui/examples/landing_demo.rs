//! Landing view rendered on its own
//!
//! No session provider is mounted, so the page falls back to an anonymous,
//! already-resolved session and skips the loading placeholder.
//! To run in browser (requires trunk): `trunk serve examples/landing_demo.rs`

use leptos::prelude::*;
use leptos_router::components::Router;
use sourcedevie_ui::pages::Landing;

/// Demo app showcasing the Landing page
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Landing />
        </Router>
    }
}

/// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

fn main() {
    // This is just a placeholder for cargo to compile
    // The actual app runs in WASM via trunk
    #[cfg(not(target_arch = "wasm32"))]
    {
        println!("This example should be run with trunk serve");
        println!("Run: trunk serve examples/landing_demo.rs");
    }
}
