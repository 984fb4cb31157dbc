//! Session/auth manager.

use uuid::Uuid;

use super::crypto::{hash_password, verify_password};
use super::errors::AuthError;
use super::types::User;
use crate::Result;
use crate::constants::{SESSION_KEY, USERS_KEY};
use crate::storage::Storage;

/// Owner of the user collection and the current-session pointer.
///
/// `SessionManager` is the sole writer of the [`USERS_KEY`] and
/// [`SESSION_KEY`] storage keys; no other component may touch them. It is a
/// cheap-to-clone handle (the underlying [`Storage`] is shared).
///
/// Failure semantics follow a write-hard, read-soft split: storage failures
/// on `register` and `logout` propagate because silently dropping a
/// registration is unacceptable, while every read path (and the whole `login`
/// path) resolves to a definite authentication decision instead of surfacing
/// a raw storage error.
#[derive(Clone, Debug)]
pub struct SessionManager {
    storage: Storage,
}

impl SessionManager {
    /// Create a manager over the given storage.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Register a new user and make them the logged-in user.
    ///
    /// Scans the collection for the email (case-sensitive); if present,
    /// rejects with [`AuthError::DuplicateEmail`] without mutation. Otherwise
    /// appends a new record with a fresh UUID and hashed password, persists
    /// the collection, then persists the session pointer.
    ///
    /// The collection write lands before the pointer write: a crash in
    /// between leaves the user registered but not logged in, recoverable by a
    /// subsequent login.
    ///
    /// # Errors
    /// [`AuthError::DuplicateEmail`] on a taken email, or a
    /// [`StorageError`](crate::storage::StorageError) if a write fails.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        let mut users = self.users().await;

        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail {
                email: email.to_string(),
            }
            .into());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
        };
        users.push(user.clone());

        self.storage.put(USERS_KEY, &users).await?;
        self.storage.put(SESSION_KEY, &user).await?;

        tracing::debug!(user_id = %user.id, email, "Registered new user");
        Ok(user)
    }

    /// Log in by email and password, persisting the match as the session
    /// pointer.
    ///
    /// The first record (in collection order) whose email matches exactly and
    /// whose stored hash verifies the submitted password wins. Login never
    /// surfaces a raw storage error: an unreadable collection reads as empty,
    /// and a failed pointer write is logged and reported as a rejection, so
    /// the outcome is always a plain accept/reject.
    ///
    /// # Errors
    /// [`AuthError::InvalidCredentials`] when no record matches.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let users = self.users().await;

        let user = users
            .iter()
            .find(|u| u.email == email && verify_password(password, &u.password_hash))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        if let Err(e) = self.storage.put(SESSION_KEY, &user).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to persist session pointer; rejecting login");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(user_id = %user.id, email, "Logged in");
        Ok(user)
    }

    /// Remove the session pointer. Succeeds even if no session was active.
    ///
    /// # Errors
    /// A [`StorageError`](crate::storage::StorageError) if the removal fails.
    pub async fn logout(&self) -> Result<()> {
        self.storage.remove(SESSION_KEY).await
    }

    /// Read the persisted session pointer, if any.
    ///
    /// Returns the stored record verbatim, with no re-validation against the
    /// user collection (no delete path exists, so a pointer cannot dangle).
    /// Read failures are treated as an absent session.
    pub async fn restore_session(&self) -> Option<User> {
        self.storage.get(SESSION_KEY).await
    }

    /// Snapshot of the full user collection. Absent reads as empty.
    pub async fn users(&self) -> Vec<User> {
        self.storage.get(USERS_KEY).await.unwrap_or_default()
    }
}
