//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Minimum recommended signing key length for HS256
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Invalid auth configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthConfigError {
    /// Signing secret missing or blank
    #[error("token signing secret must not be empty")]
    EmptySecret,
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for signing session tokens
    pub jwt_secret: Vec<u8>,
    /// Token validity window
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Tokens are valid for one hour from issuance
    pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

    /// Create config from a signing secret
    ///
    /// There is no insecure fallback: a blank secret is rejected.
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Result<Self, AuthConfigError> {
        let jwt_secret = secret.into();
        if jwt_secret.iter().all(u8::is_ascii_whitespace) {
            return Err(AuthConfigError::EmptySecret);
        }

        Ok(Self {
            jwt_secret,
            token_ttl: Self::TOKEN_TTL,
            password_pepper: None,
        })
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        let pepper = pepper.into();
        self.password_pepper = (!pepper.is_empty()).then_some(pepper);
        self
    }

    /// Whether the secret is shorter than recommended
    pub fn has_weak_secret(&self) -> bool {
        self.jwt_secret.len() < RECOMMENDED_SECRET_LEN
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
