//! Durability error types for the storage layer.
//!
//! This module defines structured error types for key-value store operations,
//! providing error context and type safety compared to string-based errors.

use thiserror::Error;

/// Errors that can occur during key-value store operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serialization of a value to JSON text failed.
    #[error("Serialization failed for key '{key}'")]
    SerializationFailed {
        /// The key whose value could not be serialized
        key: String,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization of stored JSON text failed.
    #[error("Deserialization failed for key '{key}'")]
    DeserializationFailed {
        /// The key whose value could not be deserialized
        key: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error while persisting or loading the store.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The persisted store file uses an unsupported format version.
    #[error("Unsupported persistence version {version}; only version {supported} is supported")]
    UnsupportedVersion {
        /// The version found on disk
        version: u8,
        /// The version this build understands
        supported: u8,
    },
}

impl StorageError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StorageError::FileIo { .. })
    }

    /// Check if this error is a serialization/deserialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StorageError::SerializationFailed { .. } | StorageError::DeserializationFailed { .. }
        )
    }

    /// Get the key this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            StorageError::SerializationFailed { key, .. }
            | StorageError::DeserializationFailed { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from StorageError to the main Error type
impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
