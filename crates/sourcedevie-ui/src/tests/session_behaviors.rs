//! Behavioral tests for session restoration

use crate::config::AppConfig;
use crate::error::UiError;
use crate::models::{SessionStatus, restore_user};
use crate::state::SessionContext;
use leptos::prelude::*;

#[test]
fn given_no_stored_record_when_restored_then_anonymous() {
    assert_eq!(restore_user(None).unwrap(), None);
}

#[test]
fn given_stored_record_with_email_when_restored_then_user_kept() {
    let raw = r#"{"id":"u-9","display_name":"Yann","email":"yann@example.org"}"#;

    let user = restore_user(Some(raw)).unwrap().unwrap();

    assert_eq!(user.email.as_deref(), Some("yann@example.org"));
}

#[test]
fn given_corrupt_record_when_restored_then_decode_error() {
    let err = restore_user(Some("[1, 2, 3]")).unwrap_err();
    assert!(matches!(err, UiError::SessionDecode(_)));
}

#[test]
fn given_loading_context_when_resolved_anonymously_then_ready_without_user() {
    Owner::new().with(|| {
        let session = SessionContext::new(SessionStatus::loading());

        session.resolve(None);

        assert_eq!(session.status().get_untracked(), SessionStatus::ready(None));
    });
}

#[test]
fn given_default_config_when_read_then_session_key_is_namespaced() {
    assert!(
        AppConfig::default()
            .session_storage_key
            .starts_with("sourcedevie.")
    );
}
