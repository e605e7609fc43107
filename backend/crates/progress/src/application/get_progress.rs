//! Get Progress Use Case

use std::sync::Arc;

use crate::domain::entities::LessonProgress;
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::{CourseKey, Percentage, normalize_id};
use crate::error::{ProgressError, ProgressResult};

/// Get progress input
#[derive(Debug, Clone, Default)]
pub struct GetProgressInput {
    pub user_id: Option<String>,
    pub course_id: Option<String>,
}

/// Get progress output
#[derive(Debug, Clone)]
pub struct GetProgressOutput {
    pub lessons: Vec<LessonProgress>,
    /// 0 when nothing was ever recorded for the key
    pub progress_percentage: Percentage,
}

/// Get progress use case
pub struct GetProgressUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
}

impl<R> GetProgressUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: GetProgressInput) -> ProgressResult<GetProgressOutput> {
        let (Some(user_id), Some(course_id)) =
            (normalize_id(input.user_id), normalize_id(input.course_id))
        else {
            return Err(ProgressError::MissingCourseKey);
        };

        let key = CourseKey::new(user_id, course_id);

        let snapshot = self.repo.find_progress(&key).await?;
        let progress_percentage = snapshot
            .aggregate
            .map(|aggregate| aggregate.progress_percentage)
            .unwrap_or(Percentage::ZERO);

        Ok(GetProgressOutput {
            lessons: snapshot.lessons,
            progress_percentage,
        })
    }
}
