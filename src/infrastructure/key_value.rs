//! Key-value persistence capability
//!
//! Preferences that a browser would keep in local storage go through
//! [`KeyValueStore`] so callers can be tested against [`InMemoryStore`] and
//! run against [`JsonFileStore`].

use crate::domain::config_types::StorageKey;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors raised by a key-value backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistent string storage keyed by [`StorageKey`]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any
    async fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &StorageKey, value: String) -> Result<(), StoreError>;

    /// Remove `key`, returning the value it held
    async fn remove(&self, key: &StorageKey) -> Result<Option<String>, StoreError>;
}

/// Process-local store, lost on exit
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, key: &StorageKey, value: String) -> Result<(), StoreError> {
        self.entries.write().insert(key.clone(), value);
        Ok(())
    }

    async fn remove(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.write().remove(key))
    }
}

/// Store backed by a single JSON object on disk
///
/// Every operation reads the file; writes rewrite it whole. A missing file
/// reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(io_error)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(entries).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, bytes).await.map_err(io_error)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key.as_ref()))
    }

    async fn put(&self, key: &StorageKey, value: String) -> Result<(), StoreError> {
        let mut entries = self.load().await?;
        entries.insert(key.as_ref().to_string(), value);
        self.save(&entries).await
    }

    async fn remove(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        let mut entries = self.load().await?;
        let previous = entries.remove(key.as_ref());
        if previous.is_some() {
            self.save(&entries).await?;
        }
        Ok(previous)
    }
}
