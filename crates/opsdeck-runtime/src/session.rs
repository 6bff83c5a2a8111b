use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

/// Shortest password the mock check accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Simulated latency of the credential check.
pub const LOGIN_DELAY: Duration = Duration::from_millis(500);

/// The signed-in identity, persisted between runs as a JSON file under the
/// data directory. This is the terminal analog of the original fake browser
/// session: a convenience record, not a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Presence signal consumed by the shell.
///
/// The shell renders nothing substantive while `Checking` and sends the user
/// back to `login` once the check settles on `SignedOut`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Checking,
    SignedIn(Session),
    SignedOut,
}

/// File-backed mock session store.
pub struct SessionStore {
    path: PathBuf,
    login_delay: Duration,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
            login_delay: LOGIN_DELAY,
        }
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Validate credentials and persist the session.
    ///
    /// Any non-empty email with a password of at least six characters is
    /// accepted; this is a mock check, not authentication. The display name
    /// is the local part of the email.
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        if !self.login_delay.is_zero() {
            std::thread::sleep(self.login_delay);
        }

        if email.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::InvalidCredentials);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let session = Session {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name,
            created_at: Utc::now(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&session)?)?;

        Ok(session)
    }

    /// Remove the stored session. Signing out twice is fine.
    pub fn logout(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Load the persisted session.
    ///
    /// A missing or corrupt file reads as signed out; a stale session file
    /// must never wedge the console.
    pub fn check(&self) -> SessionStatus {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(session) => SessionStatus::SignedIn(session),
                Err(_) => SessionStatus::SignedOut,
            },
            Err(_) => SessionStatus::SignedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn store(dir: &Path) -> SessionStore {
        SessionStore::new(dir).with_login_delay(Duration::ZERO)
    }

    #[test]
    fn test_login_persists_and_check_restores() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());

        let session = store.login("alice@example.com", "secret1").unwrap();
        assert_eq!(session.name, "alice");

        match store.check() {
            SessionStatus::SignedIn(restored) => assert_eq!(restored, session),
            other => panic!("expected SignedIn, got {:?}", other),
        }
    }

    #[test]
    fn test_short_password_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = store(dir.path()).login("alice@example.com", "12345").unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(dir.path()).login("  ", "secret1").is_err());
    }

    #[test]
    fn test_logout_clears_the_session_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());

        store.login("bob@example.com", "secret1").unwrap();
        store.logout().unwrap();
        assert_eq!(store.check(), SessionStatus::SignedOut);

        store.logout().unwrap();
    }

    #[test]
    fn test_missing_session_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store(dir.path()).check(), SessionStatus::SignedOut);
    }

    #[test]
    fn test_corrupt_session_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "{not json").unwrap();
        assert_eq!(store(dir.path()).check(), SessionStatus::SignedOut);
    }
}
