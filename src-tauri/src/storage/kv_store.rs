//! Key-value JSON persistence adapter
//!
//! Stores one JSON document per key under the app data directory.
//! This boundary is intentionally fire-and-forget: `load` absorbs I/O
//! and parse failures into `None`, and `save` swallows failures after
//! a diagnostic log. Callers must treat every load as "best effort,
//! may legitimately be empty."

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// File-backed JSON key-value store
#[derive(Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load and deserialize the document stored under `key`.
    ///
    /// Returns `None` when the document is missing, unreadable or
    /// malformed; the latter two are logged but never surfaced.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read storage key {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Malformed document under storage key {}: {}", key, e);
                None
            }
        }
    }

    /// Serialize `value` and replace the document stored under `key`.
    ///
    /// Failures are logged and dropped; there is no retry.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value).await {
            tracing::warn!("Failed to save storage key {}: {}", key, e);
        }
    }

    async fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let data = serde_json::to_vec(value)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write to temp file first, then rename into place
        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, &path).await?;

        tracing::debug!("Saved storage key {} ({} bytes)", key, data.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (KvStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_load_missing_key_returns_none() {
        let (store, _temp) = create_test_store();

        let loaded: Option<Vec<String>> = store.load("nothing").await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let (store, _temp) = create_test_store();

        let value = vec!["a".to_string(), "b".to_string()];
        store.save("items", &value).await;

        let loaded: Option<Vec<String>> = store.load("items").await;
        assert_eq!(loaded, Some(value));
    }

    #[tokio::test]
    async fn test_malformed_document_loads_as_none() {
        let (store, temp) = create_test_store();

        std::fs::write(temp.path().join("broken.json"), b"{not json").unwrap();

        let loaded: Option<Vec<String>> = store.load("broken").await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_prior_value() {
        let (store, _temp) = create_test_store();

        store.save("n", &1u32).await;
        store.save("n", &2u32).await;

        let loaded: Option<u32> = store.load("n").await;
        assert_eq!(loaded, Some(2));
    }

    #[tokio::test]
    async fn test_save_creates_missing_root() {
        let temp = TempDir::new().unwrap();
        let store = KvStore::new(temp.path().join("deep").join("data"));

        store.save("k", &"v").await;

        let loaded: Option<String> = store.load("k").await;
        assert_eq!(loaded.as_deref(), Some("v"));
    }
}
