//! Mock, local-only session layer.
//!
//! The original dashboard gated every page on two raw localStorage flags.
//! Here the same placeholder semantics live behind an explicit `Session`
//! object persisted through the store plugin: any non-empty email/password
//! pair is accepted, nothing is validated server-side, and there is no
//! expiry. Real authentication is an explicit non-goal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tauri::{AppHandle, Runtime};
use tauri_plugin_store::StoreExt;

const STORE_FILE: &str = "session.json";
const KEY_LOGGED_IN: &str = "isLoggedIn";
const KEY_EMAIL: &str = "userEmail";
const KEY_LOGGED_IN_AT: &str = "loggedInAt";

/// The signed-in user as seen by protected views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Session store error: {0}")]
    Store(#[from] tauri_plugin_store::Error),
}

/// Mock acceptance rule: both fields present, nothing else checked.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), SessionError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(SessionError::MissingCredentials);
    }
    Ok(())
}

/// Accept the credentials and persist the session. Signup shares the same
/// mock acceptance, so it routes through here too.
pub fn login<R: Runtime>(
    app: &AppHandle<R>,
    email: &str,
    password: &str,
) -> Result<Session, SessionError> {
    validate_credentials(email, password)?;

    let session = Session {
        email: email.trim().to_string(),
        logged_in_at: Utc::now(),
    };

    let store = app.store(STORE_FILE)?;
    store.set(KEY_LOGGED_IN, json!(true));
    store.set(KEY_EMAIL, json!(session.email));
    store.set(KEY_LOGGED_IN_AT, json!(session.logged_in_at));
    store.save()?;

    Ok(session)
}

/// The current session, if any. Protected views call this on mount.
pub fn current_session<R: Runtime>(app: &AppHandle<R>) -> Result<Option<Session>, SessionError> {
    let store = app.store(STORE_FILE)?;

    let logged_in = store
        .get(KEY_LOGGED_IN)
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if !logged_in {
        return Ok(None);
    }

    let email = match store.get(KEY_EMAIL).and_then(|v| v.as_str().map(String::from)) {
        Some(e) => e,
        None => return Ok(None),
    };

    let logged_in_at = store
        .get(KEY_LOGGED_IN_AT)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_else(Utc::now);

    Ok(Some(Session {
        email,
        logged_in_at,
    }))
}

/// Clear the persisted session.
pub fn logout<R: Runtime>(app: &AppHandle<R>) -> Result<(), SessionError> {
    let store = app.store(STORE_FILE)?;
    store.delete(KEY_LOGGED_IN);
    store.delete(KEY_EMAIL);
    store.delete(KEY_LOGGED_IN_AT);
    store.save()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_any_non_empty_pair() {
        assert!(validate_credentials("dispatcher@example.com", "pw").is_ok());
        assert!(validate_credentials("anything", "anything").is_ok());
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(matches!(
            validate_credentials("", "pw"),
            Err(SessionError::MissingCredentials)
        ));
        assert!(matches!(
            validate_credentials("user@example.com", ""),
            Err(SessionError::MissingCredentials)
        ));
        assert!(matches!(
            validate_credentials("   ", "pw"),
            Err(SessionError::MissingCredentials)
        ));
    }
}
