//! Session projection read by the views

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Signed-in user as persisted by the auth layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Loading flag plus the current user, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStatus {
    pub is_loading: bool,
    pub user: Option<User>,
}

impl SessionStatus {
    /// Session still being resolved
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            is_loading: true,
            user: None,
        }
    }

    /// Session resolved, with or without a user
    #[must_use]
    pub const fn ready(user: Option<User>) -> Self {
        Self {
            is_loading: false,
            user,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.display_name.as_str())
    }
}

/// Decode a persisted user record
///
/// `None` or blank input means nobody is signed in.
///
/// # Errors
/// Returns `UiError::SessionDecode` for malformed JSON or a record without
/// an id.
pub fn restore_user(raw: Option<&str>) -> Result<Option<User>> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    let user: User = serde_json::from_str(raw)?;
    if user.id.trim().is_empty() {
        return Err(UiError::SessionDecode("user id is empty".to_string()));
    }
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_loading_has_no_user() {
        let status = SessionStatus::loading();
        assert!(status.is_loading);
        assert!(status.user.is_none());
    }

    #[test]
    fn test_restore_user() {
        let user = restore_user(Some(r#"{"id":"u-1","display_name":"Awa"}"#))
            .unwrap()
            .unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.display_name, "Awa");
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_restore_user_blank_is_anonymous() {
        assert_eq!(restore_user(None).unwrap(), None);
        assert_eq!(restore_user(Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_restore_user_rejects_garbage() {
        assert!(matches!(
            restore_user(Some("{oops")),
            Err(UiError::SessionDecode(_))
        ));
    }

    #[test]
    fn test_restore_user_rejects_empty_id() {
        assert_eq!(
            restore_user(Some(r#"{"id":"","display_name":"Ghost"}"#)),
            Err(UiError::SessionDecode("user id is empty".to_string()))
        );
    }

    #[test]
    fn test_user_serializes_without_empty_email() {
        let user = User {
            id: "u-2".to_string(),
            display_name: "Noé".to_string(),
            email: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("email"));
    }
}
