//! Credential Entity
//!
//! Email → password-hash pair. Created on signup, never mutated or deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// Credential entity
///
/// The email is the natural key; at most one credential exists per email.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Login identifier (exact match)
    pub email: Email,
    /// Argon2id hash, never the plaintext
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential
    pub fn new(email: Email, password_hash: UserPassword) -> Self {
        Self {
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
