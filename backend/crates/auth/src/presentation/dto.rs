//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::CredentialsInput;

// ============================================================================
// Sign Up / Sign In
// ============================================================================

/// Credentials request body, shared by `/signup` and `/login`
///
/// Fields are optional so that absence is reported with the
/// "required" message instead of a deserialization error.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<CredentialsRequest> for CredentialsInput {
    fn from(req: CredentialsRequest) -> Self {
        CredentialsInput {
            email: req.email,
            password: req.password,
        }
    }
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
}

// ============================================================================
// Session
// ============================================================================

/// Session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub success: bool,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}
