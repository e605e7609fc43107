//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::credential::Credential;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Store a credential unless one already exists for its email
    ///
    /// Returns `false` (and stores nothing) on a duplicate email.
    /// Must be atomic with respect to concurrent inserts of the same email.
    async fn insert_if_absent(&self, credential: &Credential) -> AuthResult<bool>;

    /// Find credential by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Credential>>;

    /// Check if a credential exists for the email
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
