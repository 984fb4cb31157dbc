//! File-backed storage backend.
//!
//! This backend keeps the full key-value map in memory and rewrites a single
//! JSON file on every mutation, so small stores (a user list and a session
//! pointer) stay durable across process restarts without a database.

use std::any::Any;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{StorageBackend, StorageError};
use crate::Result;

/// The current persistence file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// On-disk snapshot of the store.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    /// File format version for compatibility checking
    #[serde(rename = "_v", default, skip_serializing_if = "is_v0")]
    version: u8,
    entries: HashMap<String, String>,
}

/// A durable backend persisting the store to a single JSON file.
///
/// Every `put`/`remove` serializes the full map to a temporary file in the
/// same directory and renames it over the target path, so a crash mid-write
/// leaves either the old or the new file in place — a subsequent read never
/// observes a partial write. The in-memory map is only updated after the
/// rename succeeds.
///
/// Opening a path that does not exist yields an empty store; the file is
/// created on the first `put`.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFile {
    /// Open a store at `path`, loading any previously persisted state.
    ///
    /// # Errors
    /// Returns [`StorageError::FileIo`] if an existing file cannot be read,
    /// [`StorageError::DeserializationFailed`] if its contents are not a
    /// valid snapshot, or [`StorageError::UnsupportedVersion`] if it was
    /// written by an incompatible format version.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if tokio::fs::try_exists(&path)
            .await
            .map_err(|source| StorageError::FileIo { source })?
        {
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| StorageError::FileIo { source })?;
            let snapshot: Snapshot = serde_json::from_str(&text).map_err(|source| {
                StorageError::DeserializationFailed {
                    key: path.display().to_string(),
                    source,
                }
            })?;
            if snapshot.version != PERSISTENCE_VERSION {
                return Err(StorageError::UnsupportedVersion {
                    version: snapshot.version,
                    supported: PERSISTENCE_VERSION,
                }
                .into());
            }
            snapshot.entries
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a snapshot of `entries` to disk via temp-file + rename.
    async fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let snapshot = Snapshot {
            version: PERSISTENCE_VERSION,
            entries: entries.clone(),
        };
        let text = serde_json::to_string_pretty(&snapshot).map_err(|source| {
            StorageError::SerializationFailed {
                key: self.path.display().to_string(),
                source,
            }
        })?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, text)
            .await
            .map_err(|source| StorageError::FileIo { source })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StorageError::FileIo { source })?;
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for JsonFile {
    async fn put(&self, key: &str, value: String) -> Result<()> {
        // Persist the updated snapshot before committing it to memory, so a
        // failed write is not observable to a subsequent read.
        let mut entries = self.entries.write().await;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value);
        self.persist(&updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.persist(&updated).await?;
        *entries = updated;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
