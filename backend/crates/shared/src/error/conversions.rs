//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! and the JSON failure envelope used for every error response.

use serde::Serialize;

use super::app_error::AppError;

/// Body of every failed response: `{ "success": false, "message": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct FailureBody<'a> {
    pub success: bool,
    pub message: &'a str,
}

impl<'a> FailureBody<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal("I/O operation failed").with_source(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::internal("Background task failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::invalid_input("Malformed JSON payload").with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Every store failure is an internal error; the driver error is kept as the
/// source for logging and never reaches the client.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let message = match &err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => "Database connection unavailable",
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) => "Database connection error",
            _ => "Database error",
        };
        AppError::internal(message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        let message = match &rejection {
            JsonRejection::MissingJsonContentType(_) => "Expected a JSON request body",
            JsonRejection::JsonSyntaxError(_) => "Malformed JSON payload",
            JsonRejection::JsonDataError(_) => "Invalid request fields",
            _ => "Invalid request body",
        };
        AppError::invalid_input(message).with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::invalid_input("Invalid query parameters").with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(FailureBody::new(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_failure_body_shape() {
        let body = serde_json::to_value(FailureBody::new("Email and password are required"))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "message": "Email and password are required"
            })
        );
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_error_is_internal() {
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::Internal);

        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::Internal);
        assert_eq!(app_err.message(), "Database error");
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_hides_source() {
        use axum::response::IntoResponse;

        let io_err = std::io::Error::other("connection reset by peer at 10.0.0.3");
        let response = AppError::internal("Internal Server Error")
            .with_source(io_err)
            .into_response();
        assert_eq!(response.status().as_u16(), 500);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains(r#""success":false"#));
        assert!(!text.contains("10.0.0.3"));
    }
}
