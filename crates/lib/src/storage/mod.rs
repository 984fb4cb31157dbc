//! Storage layer for the jotter session core.
//!
//! This module provides the `StorageBackend` trait and the backend
//! implementations, together with the typed `Storage` handle the rest of the
//! crate operates through.
//!
//! The `StorageBackend` trait defines the interface for durably storing JSON
//! text under string keys. This keeps the session logic (`SessionManager`,
//! `FlowController`) independent of the specific storage mechanism.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

pub mod errors;
mod in_memory;
mod json_file;

pub use errors::StorageError;
pub use in_memory::InMemory;
pub use json_file::JsonFile;

/// Storage backend abstracting the underlying durability mechanism.
///
/// Backends store opaque JSON text; serialization and the typed read policy
/// live in [`Storage`]. Each call must complete or fail atomically: a
/// subsequent `get` never observes a partial write. No guarantee spans
/// multiple keys — two consecutive `put`s are independent operations.
///
/// All backend implementations must be `Send` and `Sync` to allow sharing
/// across tasks, and implement `Any` to allow for downcasting if needed.
#[async_trait]
pub trait StorageBackend: Send + Sync + Any {
    /// Durably stores serialized JSON text under `key`, overwriting any
    /// previous value.
    async fn put(&self, key: &str, value: String) -> Result<()>;

    /// Returns the stored text for `key`, or `None` if the key was never set.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Deletes `key`. A no-op if the key is absent.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Returns a reference to the backend instance as a dynamic `Any` type.
    ///
    /// This allows for downcasting to a concrete backend implementation if
    /// necessary. Use with caution.
    fn as_any(&self) -> &dyn Any;
}

/// Typed handle over a shared storage backend.
///
/// `Storage` is a cheap-to-clone handle around `Arc<dyn StorageBackend>`.
/// It adds JSON serialization on top of the backend's text interface and
/// implements the read-soft-fail policy: any failure on the read path
/// (backend I/O, corrupt stored text) is logged and reported as an absent
/// value, so readers always resolve to a definite answer. Write and delete
/// failures propagate to the caller.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl Storage {
    /// Wrap a backend in a typed handle.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Serialize `value` to JSON text and durably store it under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::SerializationFailed`] if the value cannot be
    /// serialized, or the backend's error if the write fails.
    pub async fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value).map_err(|source| {
            StorageError::SerializationFailed {
                key: key.to_string(),
                source,
            }
        })?;
        self.backend.put(key, text).await
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `None` if the key was never set. Under the read-soft-fail
    /// policy a backend read failure or unreadable stored text also reads as
    /// `None`, with a `warn` diagnostic; callers cannot distinguish "never
    /// set" from "corrupt".
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.backend.get(key).await {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Read failed; treating key as absent");
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored value unreadable; treating key as absent");
                None
            }
        }
    }

    /// Delete the value stored under `key`. Succeeds if the key is absent.
    ///
    /// # Errors
    /// Returns the backend's error if the delete fails.
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove(key).await
    }

    /// Access the underlying backend, e.g. for downcasting.
    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
