//! Progress Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::catalog::CourseCatalog;
use crate::domain::repository::ProgressRepository;
use crate::infra::postgres::PgProgressRepository;
use crate::presentation::handlers::{self, ProgressAppState};

/// Create the Progress router with PostgreSQL repository
pub fn progress_router(repo: PgProgressRepository, catalog: Arc<CourseCatalog>) -> Router {
    progress_router_generic(repo, catalog)
}

/// Create a generic Progress router for any repository implementation
pub fn progress_router_generic<R>(repo: R, catalog: Arc<CourseCatalog>) -> Router
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let state = ProgressAppState {
        repo: Arc::new(repo),
        catalog,
    };

    Router::new()
        .route("/update-progress", post(handlers::update_progress::<R>))
        .route("/get-progress", get(handlers::get_progress::<R>))
        .route("/get-course-content", get(handlers::get_course_content::<R>))
        .with_state(state)
}
