//! Authentication and session management for jotter.
//!
//! Provides user registration with email-uniqueness enforcement, credential
//! verification against Argon2id hashes, and the durable session pointer that
//! survives restarts.

pub mod crypto;
pub mod errors;
mod manager;
mod types;

pub use errors::AuthError;
pub use manager::SessionManager;
pub use types::User;
