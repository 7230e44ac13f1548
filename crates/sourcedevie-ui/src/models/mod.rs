//! Data models for the landing view

pub mod colors;
pub mod feature;
pub mod icon;
pub mod landing;
pub mod session;
pub mod stats;

pub use colors::{Accent, RgbColor};
pub use feature::{FEATURES, FeatureEntry, features, find_by_path};
pub use icon::Icon;
pub use landing::{HERO, HeroContent, LandingContent, LandingModel};
pub use session::{SessionStatus, User, restore_user};
pub use stats::{STATS, Stat};
