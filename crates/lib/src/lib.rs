//!
//! Jotter auth core: the local authentication and session layer for the Jotter
//! notes application.
//!
//! ## Core Concepts
//!
//! The crate is built around three components, in dependency order:
//!
//! * **Storage (`storage::Storage`)**: an async, durable key-value store
//!   mapping string keys to JSON-serializable values. Pluggable backends via
//!   the `storage::StorageBackend` trait (`storage::InMemory`,
//!   `storage::JsonFile`).
//! * **SessionManager (`auth::SessionManager`)**: owns the durable user
//!   collection and the current-session pointer, and implements
//!   register/login/logout and session restoration.
//! * **FlowController (`flow::FlowController`)**: holds the in-memory session
//!   state and decides which UI flow (sign-in vs. notes) the surrounding
//!   application should render.
//!
//! Screens and navigation live outside this crate; they consume the
//! controller's current user and invoke its operations.

pub mod auth;
pub mod constants;
pub mod flow;
pub mod storage;

pub use auth::{SessionManager, User};
pub use flow::{Flow, FlowController, SessionState};
pub use storage::Storage;

/// Result type used throughout the jotter library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the jotter library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured authentication errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured durability errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Auth(_) => "auth",
            Error::Storage(_) => "storage",
        }
    }

    /// Check if this error is an authentication rejection (duplicate email or
    /// bad credentials) rather than an infrastructure failure.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error indicates a registration with an already-used email.
    pub fn is_duplicate_email(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_duplicate_email(),
            _ => false,
        }
    }

    /// Check if this error indicates rejected login credentials.
    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_invalid_credentials(),
            _ => false,
        }
    }

    /// Check if this error is storage/durability-related.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }
}
