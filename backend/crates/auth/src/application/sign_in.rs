//! Sign In Use Case
//!
//! Verifies credentials and issues a session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::input::CredentialsInput;
use crate::application::token::TokenIssuer;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in output
pub struct SignInOutput {
    pub email: Email,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for SignInOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInOutput")
            .field("email", &self.email)
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenIssuer>,
}

impl<R> SignInUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: CredentialsInput) -> AuthResult<SignInOutput> {
        let email = self.verify(input).await?;
        let issued = self.tokens.issue(&email)?;

        tracing::info!(email = %email, "User signed in");

        Ok(SignInOutput {
            email,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    /// Check credentials and return the stored identity
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn verify(&self, input: CredentialsInput) -> AuthResult<Email> {
        let (email, password) = input.require()?;

        // Input that could never have been registered cannot match
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let credential = self.repo.find_by_email(&email).await?;
        let pepper = self.config.password_pepper.clone();

        let matched = tokio::task::spawn_blocking(move || match credential {
            Some(credential) => Ok(credential
                .password_hash
                .verify(&raw_password, pepper.as_deref())),
            // Burn a comparable amount of work for unknown emails
            None => UserPassword::from_raw(&raw_password, pepper.as_deref()).map(|_| false),
        })
        .await??;

        if !matched {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(email)
    }
}
