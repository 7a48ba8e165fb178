// src/session.rs - Session lifecycle

//! Two states, four transitions. The persisted form is `Session` (token +
//! user) stored through the platform `StorageProvider`; the state machine
//! below is the behavioral contract the guard and the API client share:
//! `Anonymous -> Authenticated` on login, `Authenticated -> Anonymous` on
//! logout or any 401.

use tracing::{debug, warn};

use crate::api::SESSION_KEY;
use crate::models::Session;
use crate::platform::StorageProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Session),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Login response carried a token.
    LoggedIn(Session),
    /// Explicit user logout.
    LoggedOut,
    /// Any request came back 401.
    Unauthorized,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous => None,
        }
    }

    /// Applies a lifecycle event. Logout and 401 from `Anonymous` are
    /// no-ops rather than errors: late 401 responses may arrive after the
    /// session is already gone.
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::LoggedIn(session) => Self::Authenticated(session),
            SessionEvent::LoggedOut | SessionEvent::Unauthorized => Self::Anonymous,
        }
    }
}

/// Restores the persisted session at boot. A corrupt entry is discarded
/// rather than surfaced; the user just logs in again.
pub fn restore_session(storage: &dyn StorageProvider) -> Option<Session> {
    let raw = match storage.get(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "failed to read persisted session");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(session) => {
            debug!("restored persisted session");
            Some(session)
        }
        Err(e) => {
            warn!(error = %e, "discarding corrupt persisted session");
            let _ = storage.remove(SESSION_KEY);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SellerUser;

    fn session() -> Session {
        Session {
            token: "tok_1".into(),
            user: SellerUser {
                id: 1,
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                image: None,
            },
        }
    }

    #[test]
    fn test_login_transition() {
        let state = SessionState::Anonymous.apply(SessionEvent::LoggedIn(session()));
        assert!(state.is_authenticated());
        assert_eq!(state.session().unwrap().token, "tok_1");
    }

    #[test]
    fn test_logout_and_unauthorized_transitions() {
        let authed = SessionState::Authenticated(session());
        assert_eq!(authed.clone().apply(SessionEvent::LoggedOut), SessionState::Anonymous);
        assert_eq!(authed.apply(SessionEvent::Unauthorized), SessionState::Anonymous);
    }

    #[test]
    fn test_late_401_while_anonymous_is_noop() {
        let state = SessionState::Anonymous.apply(SessionEvent::Unauthorized);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_restore_discards_corrupt_entry() {
        use crate::platform::native::FileStorage;

        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path().to_path_buf()).unwrap();

        storage.set(SESSION_KEY, "not json").unwrap();
        assert!(restore_session(&storage).is_none());
        // The corrupt entry was removed.
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);

        let raw = serde_json::to_string(&session()).unwrap();
        storage.set(SESSION_KEY, &raw).unwrap();
        assert_eq!(restore_session(&storage), Some(session()));
    }
}
