//! Credentials Input
//!
//! Shared `{email, password}` input for register and authenticate.

use crate::error::{AuthError, AuthResult};

/// Raw credentials as they arrive from the boundary
#[derive(Default)]
pub struct CredentialsInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Both fields, or `MissingFields` if either is absent or whitespace only
    pub fn require(self) -> AuthResult<(String, String)> {
        match (present(self.email), present(self.password)) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(AuthError::MissingFields),
        }
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

impl std::fmt::Debug for CredentialsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsInput")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
