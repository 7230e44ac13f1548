//! Router configuration for the SourceDeVie UI
//!
//! The landing page lives at `/`; every sub-application owns one top-level
//! segment.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Dashboard, Landing, NotFound, SubAppPage};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const DASHBOARD: &str = "/dashboard";
    pub const SVPAY: &str = "/svpay";
    pub const SVSTORE: &str = "/svstore";
    pub const SVCHAT: &str = "/svchat";
    pub const SVBROWSER: &str = "/svbrowser";
    pub const SVLINK: &str = "/svlink";
    pub const SVCAREERS: &str = "/svcareers";
    pub const SVSERVICES: &str = "/svservices";

    /// Every route the router serves, home first
    pub const ALL: [&str; 9] = [
        HOME, DASHBOARD, SVPAY, SVSTORE, SVCHAT, SVBROWSER, SVLINK, SVCAREERS, SVSERVICES,
    ];
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter(children: Children) -> impl IntoView {
    view! {
        <Router>
            {children()}
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Landing />
                    <Route path=StaticSegment("dashboard") view=Dashboard />
                    <Route path=StaticSegment("svpay") view=SubAppPage />
                    <Route path=StaticSegment("svstore") view=SubAppPage />
                    <Route path=StaticSegment("svchat") view=SubAppPage />
                    <Route path=StaticSegment("svbrowser") view=SubAppPage />
                    <Route path=StaticSegment("svlink") view=SubAppPage />
                    <Route path=StaticSegment("svcareers") view=SubAppPage />
                    <Route path=StaticSegment("svservices") view=SubAppPage />
                </Routes>
            </main>
        </Router>
    }
}
