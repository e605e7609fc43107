//! Auth Middleware
//!
//! Middleware for requiring a bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::{CheckSessionUseCase, TokenIssuer};
use crate::domain::value_object::email::Email;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenIssuer>,
}

/// Identity of the caller, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: Email,
    pub expires_at: DateTime<Utc>,
}

/// Middleware that requires a valid `Authorization: Bearer <token>` header
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer_token(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let use_case = CheckSessionUseCase::new(state.tokens.clone());

    match use_case.execute(authorization) {
        Ok(identity) => {
            req.extensions_mut().insert(AuthenticatedUser {
                email: identity.email,
                expires_at: identity.expires_at,
            });
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}
