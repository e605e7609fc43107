//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential entity, value objects, repository trait
//! - `application/` - Use cases, token issuer, config
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Signup/login with email + password
//! - Stateless session tokens (JWT, HS256, one hour)
//! - `require_bearer_token` middleware for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Unknown email and wrong password are indistinguishable (message and timing)
//! - No fallback signing key; startup fails without one

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, AuthConfigError};
pub use application::token::TokenIssuer;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryCredentialRepository, postgres::PgCredentialRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
