//! Progress Error Types
//!
//! This module provides progress-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Progress-specific result type alias
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Progress-specific error variants
#[derive(Debug, Error)]
pub enum ProgressError {
    /// A lesson update is missing one of its four fields
    #[error("All fields are required")]
    MissingFields,

    /// A progress query is missing userId or courseId
    #[error("User ID and Course ID are required")]
    MissingCourseKey,

    /// A content query is missing courseId
    #[error("Course ID is required")]
    MissingCourseId,

    /// No catalog entry for the course
    #[error("Course not found")]
    CourseNotFound,

    /// Lesson is not part of the course's catalog entry
    #[error("Lesson not found")]
    LessonNotFound,

    /// Error raised by a kernel-level component (extractors)
    #[error(transparent)]
    App(#[from] AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ProgressError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProgressError::MissingFields
            | ProgressError::MissingCourseKey
            | ProgressError::MissingCourseId => ErrorKind::InvalidInput,
            ProgressError::CourseNotFound | ProgressError::LessonNotFound => ErrorKind::NotFound,
            ProgressError::App(err) => err.kind(),
            ProgressError::Database(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to show to the client
    pub fn client_message(&self) -> String {
        match self {
            ProgressError::App(err) if !err.is_server_error() => err.message().to_string(),
            ProgressError::App(_) | ProgressError::Database(_) => {
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProgressError::Database(e) => {
                tracing::error!(error = %e, "Progress database error");
            }
            ProgressError::App(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Progress internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Progress error");
            }
        }
    }
}

impl From<ProgressError> for AppError {
    fn from(err: ProgressError) -> Self {
        AppError::new(err.kind(), err.client_message())
    }
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for ProgressError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ProgressError::App(rejection.into())
    }
}

impl From<axum::extract::rejection::QueryRejection> for ProgressError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        ProgressError::App(rejection.into())
    }
}
