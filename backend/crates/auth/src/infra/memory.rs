//! In-Memory Repository Implementation
//!
//! Process-local credential store for tests and database-less runs.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// In-memory credential repository
#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    credentials: Arc<RwLock<HashMap<Email, Credential>>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored credentials
    pub fn len(&self) -> usize {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    async fn insert_if_absent(&self, credential: &Credential) -> AuthResult<bool> {
        let mut credentials = self
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if credentials.contains_key(&credential.email) {
            return Ok(false);
        }

        credentials.insert(credential.email.clone(), credential.clone());
        Ok(true)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Credential>> {
        Ok(self
            .credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(email))
    }
}
