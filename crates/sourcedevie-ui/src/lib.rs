//! Leptos 0.7 CSR landing view for the SourceDeVie platform
//!
//! SourceDeVie bundles several consumer applications (payments, store,
//! chat, browser, bookmarks, careers, services). This crate is the entry
//! page that presents them and routes the user into each one.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown), built with Trunk
//! - Type-safe routing with leptos_router
//! - View decisions in plain data (`models::LandingModel`), components
//!   only render them
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and navigation
//! - `navigation`: Navigation requests and the `Navigator` seam
//! - `pages`: Top-level page components
//! - `components`: Reusable UI components
//! - `models`: Feature catalog, session projection, landing view model
//! - `state`: Session-status provider
//! - `config`, `logging`, `error`: ambient plumbing

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod router;
pub mod state;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
pub use config::AppConfig;
pub use error::{Result, UiError};

#[cfg(test)]
mod tests;
