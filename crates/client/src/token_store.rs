//! Durable persistence for the session bearer token.
//!
//! The web rendition of Money Map kept the token in a cookie so a full
//! page reload could pick the session back up; here a small JSON file
//! plays that role. The route guard and the action creators read the
//! token from this store, never from the in-memory session slice.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub trait TokenStore {
    /// Returns the stored token, or `None` when no session is persisted.
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
}

/// Token store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let stored: StoredSession = serde_json::from_str(&content)?;
        Ok(stored.token.filter(|token| !token.is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&StoredSession {
            token: Some(token.to_string()),
        })?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_tokens");
        fs::create_dir_all(&root).unwrap();
        root.join(format!("session_{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn round_trips_across_instances() {
        let path = scratch_path();
        FileTokenStore::new(&path).save("T").unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.load().unwrap().as_deref(), Some("T"));

        reopened.clear().unwrap();
        assert_eq!(reopened.load().unwrap(), None);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_loads_as_no_session() {
        let store = FileTokenStore::new(scratch_path());
        assert_eq!(store.load().unwrap(), None);
        // Clearing a never-saved store is fine too.
        store.clear().unwrap();
    }

    #[test]
    fn empty_token_counts_as_no_session() {
        let path = scratch_path();
        FileTokenStore::new(&path).save("").unwrap();
        assert_eq!(FileTokenStore::new(&path).load().unwrap(), None);
        fs::remove_file(&path).ok();
    }
}
