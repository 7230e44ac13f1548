//! Session-status provider
//!
//! Owns the only writable session signal. The status starts as loading and
//! is resolved once, after mount, from the user record the auth layer keeps
//! in `localStorage`. A missing or unreadable record resolves to an
//! anonymous session so the landing gate always opens.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::error::{Result, UiError};
use crate::models::{SessionStatus, User, restore_user};

/// Reactive handle on the session status, shared through context
#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    status: RwSignal<SessionStatus>,
}

impl SessionContext {
    #[must_use]
    pub fn new(initial: SessionStatus) -> Self {
        Self {
            status: RwSignal::new(initial),
        }
    }

    /// Read-only view for consumers
    #[must_use]
    pub fn status(&self) -> ReadSignal<SessionStatus> {
        self.status.read_only()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status.with(|s| s.is_loading)
    }

    /// Mark the session as resolved
    pub fn resolve(&self, user: Option<User>) {
        tracing::info!(signed_in = user.is_some(), "session resolved");
        self.status.set(SessionStatus::ready(user));
    }

    /// Resolve from storage, degrading to anonymous on any failure
    pub fn resolve_from_storage(&self, key: &str) {
        let user = load_user(key).unwrap_or_else(|err| {
            tracing::warn!(%err, key, "could not restore session");
            None
        });
        self.resolve(user);
    }
}

/// Create the session context, provide it, and schedule its resolution
pub fn provide_session(config: &AppConfig) -> SessionContext {
    let session = SessionContext::new(SessionStatus::loading());
    provide_context(session);

    let key = config.session_storage_key.clone();
    Effect::new(move || session.resolve_from_storage(&key));

    session
}

/// Session context provided by an ancestor
///
/// Falls back to a resolved anonymous session when rendered outside
/// [`provide_session`], e.g. in isolated component demos.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        tracing::warn!("no session provider in scope, using anonymous session");
        SessionContext::new(SessionStatus::ready(None))
    })
}

/// Read and decode the persisted user under `key`
///
/// # Errors
/// Returns `UiError::WindowUnavailable` outside a browser,
/// `UiError::Storage` if `localStorage` is blocked, and
/// `UiError::SessionDecode` if the record is malformed.
pub fn load_user(key: &str) -> Result<Option<User>> {
    let raw = read_stored_session(key)?;
    restore_user(raw.as_deref())
}

fn read_stored_session(key: &str) -> Result<Option<String>> {
    let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
    let storage = window
        .local_storage()
        .map_err(|e| UiError::Storage(format!("{e:?}")))?
        .ok_or_else(|| UiError::Storage("localStorage is not available".to_string()))?;

    storage
        .get_item(key)
        .map_err(|e| UiError::Storage(format!("{e:?}")))
}
