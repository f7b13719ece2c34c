use std::sync::{Arc, Mutex};

use crate::session::{SessionError, SessionStore};

/// In-memory SessionStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entry: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn read_raw(&self) -> Result<Option<String>, SessionError> {
        Ok(self.entry.lock().map_err(|_| SessionError::Unavailable)?.clone())
    }

    fn write_raw(&self, value: &str) -> Result<(), SessionError> {
        *self.entry.lock().map_err(|_| SessionError::Unavailable)? = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.entry.lock().map_err(|_| SessionError::Unavailable)? = None;
        Ok(())
    }
}
