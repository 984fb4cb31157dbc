//! Core data types for the auth module.

use serde::{Deserialize, Serialize};

/// A registered user record.
///
/// Users are stored as a JSON array under the reserved
/// [`USERS_KEY`](crate::constants::USERS_KEY). The `email` field is the login
/// identifier and is unique across the collection (case-sensitive). The `id`
/// is a UUID assigned at registration and never changes.
///
/// The session pointer stored under
/// [`SESSION_KEY`](crate::constants::SESSION_KEY) is a *copy* of one of these
/// records, not a reference: later changes to the collection do not propagate
/// into an already-persisted pointer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, immutable identifier (UUID v4)
    pub id: String,

    /// Display name chosen at registration
    pub username: String,

    /// Login identifier, unique across the collection
    pub email: String,

    /// Password hash (Argon2id, PHC string format)
    pub password_hash: String,
}
