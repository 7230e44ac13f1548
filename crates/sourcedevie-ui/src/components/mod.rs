//! Leptos UI components for the landing view
//!
//! Pure presentation: each component renders a piece of a
//! [`LandingContent`](crate::models::LandingContent) and turns clicks into
//! [`LandingAction`](crate::navigation::LandingAction)s.

pub mod feature_card;
pub mod hero;
pub mod icon;
pub mod loading;
pub mod primitives;
pub mod stats;

pub use feature_card::{FeatureCard, FeatureGrid};
pub use hero::Hero;
pub use icon::IconGlyph;
pub use loading::LoadingPlaceholder;
pub use primitives::{Badge, Button, ButtonVariant, Card};
pub use stats::StatsBlock;
