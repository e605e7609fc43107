//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInUseCase, SignUpUseCase, TokenIssuer};
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    CredentialsRequest, MessageResponse, SessionResponse, SignInResponse,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenIssuer>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<MessageResponse>)>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "User created successfully",
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<SignInResponse>>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );
    let output = use_case.execute(req.into()).await?;

    Ok(Json(SignInResponse {
        success: true,
        message: "Login successful",
        token: output.token,
    }))
}

// ============================================================================
// Session
// ============================================================================

/// GET /session (behind `require_bearer_token`)
pub async fn session(Extension(user): Extension<AuthenticatedUser>) -> Json<SessionResponse> {
    Json(SessionResponse {
        success: true,
        email: user.email.into_db(),
        expires_at: user.expires_at,
    })
}
