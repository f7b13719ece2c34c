//! # Filesystem-backed session store
//!
//! [`FileStore`] keeps the session entry as `<base_dir>/authUser.json`. It is
//! used by the desktop build so a login survives app restarts.
//!
//! Use [`FileStore::default_location`] for the platform data directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/apex-bank/` |
//! | Linux | `~/.local/share/apex-bank/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\apex-bank\` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::session::{SessionError, SessionStore, SESSION_KEY};

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// A store rooted at `<data_dir>/apex-bank`, given the platform data dir.
    pub fn default_location(data_dir: &Path) -> Self {
        Self::new(data_dir.join("apex-bank"))
    }

    fn entry_path(&self) -> PathBuf {
        self.base.join(format!("{SESSION_KEY}.json"))
    }
}

impl SessionStore for FileStore {
    fn read_raw(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.entry_path()) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_raw(&self, value: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.entry_path(), value)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(self.entry_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthenticatedUser;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::default_location(dir.path());

        assert!(store.load().unwrap().is_none());

        let user = AuthenticatedUser {
            customer_id: Some(3),
            first_name: "sam".into(),
            last_name: "lee".into(),
            customer_name: Some("sam lee".into()),
            ..Default::default()
        };
        store.save(&user).unwrap();

        // Re-open from the same directory
        let reopened = FileStore::default_location(dir.path());
        assert_eq!(reopened.load().unwrap(), Some(user));
        assert!(dir.path().join("apex-bank").join("authUser.json").exists());

        reopened.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing a missing entry is fine
        store.clear().unwrap();
    }
}
