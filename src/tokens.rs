//! Token Storage
//!
//! Durable cache for the two session token strings, keys `access_token` and
//! `refresh_token`. Plain JSON on disk, no encryption and no expiry metadata,
//! matching the platform's storage contract. The in-memory copy is the source
//! of truth after boot; every mutation is written through to the file.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::debug;

/// On-disk shape of the token file
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct TokenFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

/// Write-through token store shared by the HTTP layer and the session store
pub struct TokenStore {
    path: PathBuf,
    tokens: RwLock<TokenFile>,
}

impl TokenStore {
    /// Open a store at the given path, loading any persisted pair.
    ///
    /// A missing or unreadable file starts the store empty; a stale token is
    /// allowed here and degrades later through the identity fetch.
    pub fn open(path: PathBuf) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tokens = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data).unwrap_or_default()
        } else {
            TokenFile::default()
        };

        Ok(Self {
            path,
            tokens: RwLock::new(tokens),
        })
    }

    /// Currently cached access token, if any
    pub fn access_token(&self) -> Option<String> {
        self.tokens.read().unwrap().access_token.clone()
    }

    /// Currently cached refresh token, if any
    pub fn refresh_token(&self) -> Option<String> {
        self.tokens.read().unwrap().refresh_token.clone()
    }

    pub fn has_access_token(&self) -> bool {
        self.tokens.read().unwrap().access_token.is_some()
    }

    /// Persist a freshly issued pair, write-through
    pub fn store(&self, access: &str, refresh: &str) -> io::Result<()> {
        let file = TokenFile {
            access_token: Some(access.to_string()),
            refresh_token: Some(refresh.to_string()),
        };
        self.write(&file)?;
        *self.tokens.write().unwrap() = file;
        debug!("Token pair persisted");
        Ok(())
    }

    /// Erase both token values and the backing file. Idempotent.
    pub fn clear(&self) -> io::Result<()> {
        *self.tokens.write().unwrap() = TokenFile::default();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        debug!("Token storage cleared");
        Ok(())
    }

    fn write(&self, file: &TokenFile) -> io::Result<()> {
        let data = serde_json::to_string_pretty(file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        let store = TokenStore::open(path.clone()).unwrap();
        assert!(store.access_token().is_none());

        store.store("A", "B").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("A"));
        assert_eq!(store.refresh_token().as_deref(), Some("B"));

        // A second store instance sees the persisted pair (boot restore path)
        let reopened = TokenStore::open(path).unwrap();
        assert_eq!(reopened.access_token().as_deref(), Some("A"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("B"));
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        let store = TokenStore::open(path.clone()).unwrap();
        store.store("A", "B").unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(store.access_token().is_none());
        assert!(!path.exists());

        // Clearing twice must not fail
        store.clear().unwrap();
    }

    #[test]
    fn test_store_supersedes_previous_pair_wholesale() {
        let dir = tempdir().unwrap();
        let store = TokenStore::open(dir.path().join("tokens.json")).unwrap();

        store.store("A1", "B1").unwrap();
        store.store("A2", "B2").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("A2"));
        assert_eq!(store.refresh_token().as_deref(), Some("B2"));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = TokenStore::open(path).unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
