//! Page components for the SourceDeVie UI
//!
//! This module contains the top-level page components for each route.

pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod sub_app;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use not_found::NotFound;
pub use sub_app::SubAppPage;
