//! Sign Up Use Case
//!
//! Registers a new credential.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::input::CredentialsInput;
use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up output
#[derive(Debug, Clone)]
pub struct SignUpOutput {
    pub email: Email,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CredentialsInput) -> AuthResult<SignUpOutput> {
        let (email, password) = input.require()?;

        let email = Email::new(email).map_err(|e| AuthError::InvalidEmail(e.message().into()))?;
        let raw_password = RawPassword::new(password)
            .map_err(|e| AuthError::PasswordValidation(e.message().into()))?;

        // Cheap rejection before paying for a hash
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await??;

        let credential = Credential::new(email, password_hash);

        // A concurrent registration may have won since the existence check
        if !self.repo.insert_if_absent(&credential).await? {
            return Err(AuthError::EmailTaken);
        }

        tracing::info!(email = %credential.email, "User signed up");

        Ok(SignUpOutput {
            email: credential.email,
        })
    }
}
