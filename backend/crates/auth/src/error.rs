//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password missing (or whitespace only)
    #[error("Email and password are required")]
    MissingFields,

    /// Email present but unusable
    #[error("{0}")]
    InvalidEmail(String),

    /// Password present but violates policy
    #[error("{0}")]
    PasswordValidation(String),

    /// Email already registered
    #[error("User already exists")]
    EmailTaken,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Authorization token required")]
    TokenMissing,

    /// Token signature valid but past its expiry
    #[error("Token expired")]
    TokenExpired,

    /// Token malformed or signed with another key
    #[error("Invalid token")]
    TokenInvalid,

    /// Error raised by a kernel-level component (value objects, extractors)
    #[error(transparent)]
    App(#[from] AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::InvalidEmail(_)
            | AuthError::PasswordValidation(_) => ErrorKind::InvalidInput,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials => ErrorKind::InvalidCredentials,
            AuthError::TokenMissing | AuthError::TokenExpired | AuthError::TokenInvalid => {
                ErrorKind::Unauthenticated
            }
            AuthError::App(err) => err.kind(),
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to show to the client
    pub fn client_message(&self) -> String {
        match self {
            AuthError::App(err) if !err.is_server_error() => err.message().to_string(),
            AuthError::App(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.client_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::App(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Rejected invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for AuthError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AuthError::App(rejection.into())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Hashing task failed: {err}"))
    }
}
