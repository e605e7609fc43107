//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::{GetCourseContentUseCase, GetProgressUseCase, RecordLessonUseCase};
use crate::domain::catalog::CourseCatalog;
use crate::domain::repository::ProgressRepository;
use crate::error::ProgressResult;
use crate::presentation::dto::{
    CourseContentQuery, CourseContentResponse, GetProgressResponse, ProgressQuery,
    UpdateProgressRequest, UpdateProgressResponse,
};

/// Shared state for progress handlers
#[derive(Clone)]
pub struct ProgressAppState<R>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub catalog: Arc<CourseCatalog>,
}

/// POST /update-progress
pub async fn update_progress<R>(
    State(state): State<ProgressAppState<R>>,
    payload: Result<Json<UpdateProgressRequest>, JsonRejection>,
) -> ProgressResult<Json<UpdateProgressResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = RecordLessonUseCase::new(state.repo.clone(), state.catalog.clone());
    let output = use_case.execute(req.into()).await?;

    Ok(Json(UpdateProgressResponse {
        success: true,
        message: "Progress updated successfully",
        progress_percentage: output.progress_percentage,
    }))
}

/// GET /get-progress
pub async fn get_progress<R>(
    State(state): State<ProgressAppState<R>>,
    query: Result<Query<ProgressQuery>, QueryRejection>,
) -> ProgressResult<Json<GetProgressResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;

    let use_case = GetProgressUseCase::new(state.repo.clone());
    let output = use_case.execute(query.into()).await?;

    Ok(Json(GetProgressResponse {
        success: true,
        progress: output.lessons.into_iter().map(Into::into).collect(),
        progress_percentage: output.progress_percentage,
    }))
}

/// GET /get-course-content
pub async fn get_course_content<R>(
    State(state): State<ProgressAppState<R>>,
    query: Result<Query<CourseContentQuery>, QueryRejection>,
) -> ProgressResult<Json<CourseContentResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;

    let use_case = GetCourseContentUseCase::new(state.catalog.clone());
    let lessons = use_case.execute(query.course_id)?;

    Ok(Json(CourseContentResponse {
        success: true,
        lessons: lessons.iter().map(Into::into).collect(),
    }))
}
