//! Constants used throughout the jotter library.
//!
//! This module provides central definitions for the reserved storage keys the
//! session layer owns. No other writer may touch these keys.

/// Storage key holding the full user collection (a JSON array of users).
pub const USERS_KEY: &str = "users";

/// Storage key holding the current session pointer (a single user record).
pub const SESSION_KEY: &str = "loggedInUser";
