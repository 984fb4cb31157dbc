//! Password hashing for the auth module.
//!
//! Uses Argon2id with per-password random salts. Hashes are stored in PHC
//! string format, so parameters and salt travel with the hash.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core},
};

use super::errors::AuthError;
use crate::Result;

/// Hash a password using Argon2id.
///
/// # Arguments
/// * `password` - The password to hash
///
/// # Returns
/// The Argon2 hash in PHC string format (embeds algorithm, parameters, salt).
pub fn hash_password(password: impl AsRef<str>) -> Result<String> {
    let salt = SaltString::generate(&mut rand_core::OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_ref().as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHashFailed {
            reason: e.to_string(),
        })?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored PHC hash string.
///
/// Returns `false` both for a wrong password and for an unparseable hash;
/// credential checks always resolve to a definite yes/no.
pub fn verify_password(password: impl AsRef<str>, password_hash: impl AsRef<str>) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash.as_ref()) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_ref().as_bytes(), &parsed_hash)
        .is_ok()
}
