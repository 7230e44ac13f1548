//! Error types for the SourceDeVie UI
//!
//! Browser APIs report failures as opaque `JsValue`s; they are mapped into
//! [`UiError`] at the call site so the rest of the crate stays on `?`.

use thiserror::Error;

/// Errors that can occur in the UI layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No feature or page is registered for the path
    #[error("Route not found: {0}")]
    RouteNotFound(String),
    /// `window` is missing (not running in a browser)
    #[error("Browser window unavailable")]
    WindowUnavailable,
    /// `localStorage` could not be opened or read
    #[error("Storage error: {0}")]
    Storage(String),
    /// The persisted session record is malformed
    #[error("Session decode failed: {0}")]
    SessionDecode(String),
    /// The tracing subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::SessionDecode(err.to_string())
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::RouteNotFound("/invalid".to_string());
        assert_eq!(error.to_string(), "Route not found: /invalid");

        let error = UiError::Storage("quota exceeded".to_string());
        assert_eq!(error.to_string(), "Storage error: quota exceeded");

        assert_eq!(
            UiError::WindowUnavailable.to_string(),
            "Browser window unavailable"
        );
    }

    #[test]
    fn test_json_error_maps_to_session_decode() {
        let parsed: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err = parsed.map_err(UiError::from);
        assert!(matches!(err, Err(UiError::SessionDecode(_))));
    }

    #[test]
    fn test_error_clone() {
        let error = UiError::Logging("bad directive".to_string());
        assert_eq!(error.clone(), error);
    }
}
