//! # Session persistence
//!
//! A [`SessionStore`] holds exactly one entry, keyed [`SESSION_KEY`], with the
//! JSON form of an [`AuthenticatedUser`]. Backends only move raw strings; the
//! provided [`SessionStore::load`] / [`SessionStore::save`] methods own the
//! schema so every backend decodes the same way.
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, and the fallback when nothing else is available |
//! | `FileStore` | desktop: `<data_dir>/apex-bank/authUser.json` |
//! | `LocalStorageStore` | web: `window.localStorage["authUser"]` |
//!
//! A payload that does not decode is reported as [`SessionError::Corrupt`]
//! rather than silently read as "signed out"; callers decide whether to
//! clear it.

use thiserror::Error;

use crate::models::AuthenticatedUser;

/// Key of the single persisted session entry.
pub const SESSION_KEY: &str = "authUser";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored session is not a valid user record: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage is not available")]
    Unavailable,
}

/// String-keyed storage for the authenticated user.
pub trait SessionStore {
    /// Read the raw entry, `None` when nothing is stored.
    fn read_raw(&self) -> Result<Option<String>, SessionError>;

    /// Replace the raw entry.
    fn write_raw(&self, value: &str) -> Result<(), SessionError>;

    /// Remove the entry. Removing a missing entry is not an error.
    fn clear(&self) -> Result<(), SessionError>;

    /// Load and decode the stored user.
    fn load(&self) -> Result<Option<AuthenticatedUser>, SessionError> {
        match self.read_raw()? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Encode and persist the user, replacing any previous session.
    fn save(&self, user: &AuthenticatedUser) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user)?;
        self.write_raw(&raw)
    }

    /// Load the stored user, clearing an entry that fails to decode.
    fn load_or_reset(&self) -> Option<AuthenticatedUser> {
        match self.load() {
            Ok(user) => user,
            Err(SessionError::Corrupt(e)) => {
                tracing::warn!("Discarding unreadable session: {}", e);
                if let Err(e) = self.clear() {
                    tracing::error!("Failed to clear session: {}", e);
                }
                None
            }
            Err(e) => {
                tracing::error!("Failed to read session: {}", e);
                None
            }
        }
    }
}
