//! In-memory storage backend.

use std::any::Any;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StorageBackend;
use crate::Result;

/// A simple in-memory backend using a `HashMap` for storage.
///
/// This backend is suitable for testing, development, or scenarios where data
/// persistence is not required. Nothing survives the process; use
/// [`JsonFile`](super::JsonFile) for durable storage.
#[derive(Debug, Default)]
pub struct InMemory {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemory {
    /// Create a new, empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for InMemory {
    async fn put(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
