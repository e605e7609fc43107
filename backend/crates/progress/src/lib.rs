//! Progress (Lesson Completion) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, course catalog, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - One lesson record per (userId, courseId, lessonId), upserted
//! - One aggregate per (userId, courseId), recomputed from scratch on every write
//! - The denominator is the catalog's lesson count, not the recorded set
//! - Upsert + count + aggregate write run as one unit per (userId, courseId)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::catalog::{CourseCatalog, Lesson};
pub use error::{ProgressError, ProgressResult};
pub use infra::{memory::InMemoryProgressRepository, postgres::PgProgressRepository};
pub use presentation::router::{progress_router, progress_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
