//! Build-time configuration
//!
//! The app ships as a static wasm bundle, so there is no runtime environment
//! to read. Values are baked in by Trunk from the build environment.

/// Default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default `localStorage` key holding the persisted session
pub const DEFAULT_SESSION_KEY: &str = "sourcedevie.session";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `info` or `sourcedevie_ui=debug`
    pub log_filter: String,
    /// `localStorage` key the session provider restores from
    pub session_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            session_storage_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Read `SOURCEDEVIE_LOG` and `SOURCEDEVIE_SESSION_KEY` as captured at
    /// compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SOURCEDEVIE_LOG"),
            option_env!("SOURCEDEVIE_SESSION_KEY"),
        )
    }

    /// Build a config from optional raw values; blank values use defaults
    #[must_use]
    pub fn from_values(log_filter: Option<&str>, session_storage_key: Option<&str>) -> Self {
        Self {
            log_filter: non_blank(log_filter).unwrap_or(DEFAULT_LOG_FILTER).to_string(),
            session_storage_key: non_blank(session_storage_key)
                .unwrap_or(DEFAULT_SESSION_KEY)
                .to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
