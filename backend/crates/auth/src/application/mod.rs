//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod input;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::{AuthConfig, AuthConfigError};
pub use input::CredentialsInput;
pub use sign_in::{SignInOutput, SignInUseCase};
pub use sign_up::{SignUpOutput, SignUpUseCase};
pub use token::{Claims, IssuedToken, TokenIdentity, TokenIssuer};
