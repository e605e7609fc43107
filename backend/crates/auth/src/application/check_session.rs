//! Check Session Use Case
//!
//! Resolves a bearer token to the identity it was issued for.

use std::sync::Arc;

use crate::application::token::{TokenIdentity, TokenIssuer};
use crate::error::{AuthError, AuthResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Check session use case
pub struct CheckSessionUseCase {
    tokens: Arc<TokenIssuer>,
}

impl CheckSessionUseCase {
    pub fn new(tokens: Arc<TokenIssuer>) -> Self {
        Self { tokens }
    }

    /// Validate the value of an `Authorization` header
    pub fn execute(&self, authorization: Option<&str>) -> AuthResult<TokenIdentity> {
        let token = Self::bearer_token(authorization).ok_or(AuthError::TokenMissing)?;
        self.tokens.validate(token)
    }

    fn bearer_token(authorization: Option<&str>) -> Option<&str> {
        let value = authorization?.trim();
        let prefix = value.get(..BEARER_PREFIX.len())?;

        if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
            return None;
        }

        let token = value[BEARER_PREFIX.len()..].trim();
        (!token.is_empty()).then_some(token)
    }
}
