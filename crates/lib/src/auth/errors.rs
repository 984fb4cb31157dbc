//! Error types for the auth module.

use thiserror::Error;

/// Authentication rejections.
///
/// These model authentication *decisions*, not infrastructure failures:
/// callers branch on them rather than treating them as exceptional. Storage
/// failures surface separately as
/// [`StorageError`](crate::storage::StorageError).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration rejected: the email is already taken.
    #[error("Email already registered: {email}")]
    DuplicateEmail {
        /// The email that is already present in the user collection
        email: String,
    },

    /// Login rejected: no user matches the submitted email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password hashing failed during registration.
    #[error("Password hashing failed: {reason}")]
    PasswordHashFailed {
        /// Description of the hashing failure
        reason: String,
    },
}

impl AuthError {
    /// Check if this error indicates a registration with an already-used email.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, AuthError::DuplicateEmail { .. })
    }

    /// Check if this error indicates rejected login credentials.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }
}

// Conversion from AuthError to the main Error type
impl From<AuthError> for crate::Error {
    fn from(err: AuthError) -> Self {
        crate::Error::Auth(err)
    }
}
