//! Application state management
//!
//! The only shared state is the session status; everything else the
//! landing view shows is static.

pub mod session;

pub use session::{SessionContext, load_user, provide_session, use_session};
