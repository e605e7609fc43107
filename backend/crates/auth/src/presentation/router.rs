//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{AuthConfig, TokenIssuer};
use crate::domain::repository::CredentialRepository;
use crate::infra::postgres::PgCredentialRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_bearer_token};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgCredentialRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenIssuer::new(&config));
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens: tokens.clone(),
    };

    let protected = Router::new()
        .route("/session", get(handlers::session))
        .route_layer(from_fn_with_state(
            AuthMiddlewareState { tokens },
            require_bearer_token,
        ));

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::sign_in::<R>))
        .with_state(state)
        .merge(protected)
}
