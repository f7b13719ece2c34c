//! # Browser `localStorage` session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the web platform.
//! It reads and writes `window.localStorage[SESSION_KEY]`. The storage handle
//! is looked up on every call; when the window or storage is missing (private
//! mode, sandboxed iframe) the calls fail with [`SessionError::Unavailable`].

use web_sys::Storage;

use crate::session::{SessionError, SessionStore, SESSION_KEY};

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, SessionError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(SessionError::Unavailable)
    }
}

impl SessionStore for LocalStorageStore {
    fn read_raw(&self) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(SESSION_KEY)
            .map_err(|_| SessionError::Unavailable)
    }

    fn write_raw(&self, value: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(SESSION_KEY, value)
            .map_err(|_| SessionError::Unavailable)
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(SESSION_KEY)
            .map_err(|_| SessionError::Unavailable)
    }
}
