//! Record Lesson Use Case
//!
//! Upserts one lesson's completion and returns the recomputed course
//! percentage.

use std::sync::Arc;

use crate::domain::catalog::CourseCatalog;
use crate::domain::entities::LessonProgress;
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::{CourseKey, Percentage, normalize_id};
use crate::error::{ProgressError, ProgressResult};

/// Record lesson input
///
/// `completed` is a required flag: `None` is rejected, `Some(false)` is valid.
#[derive(Debug, Clone, Default)]
pub struct RecordLessonInput {
    pub user_id: Option<String>,
    pub course_id: Option<String>,
    pub lesson_id: Option<String>,
    pub completed: Option<bool>,
}

/// Record lesson output
#[derive(Debug, Clone)]
pub struct RecordLessonOutput {
    pub progress_percentage: Percentage,
}

/// Record lesson use case
pub struct RecordLessonUseCase<R>
where
    R: ProgressRepository,
{
    repo: Arc<R>,
    catalog: Arc<CourseCatalog>,
}

impl<R> RecordLessonUseCase<R>
where
    R: ProgressRepository,
{
    pub fn new(repo: Arc<R>, catalog: Arc<CourseCatalog>) -> Self {
        Self { repo, catalog }
    }

    pub async fn execute(&self, input: RecordLessonInput) -> ProgressResult<RecordLessonOutput> {
        let (Some(user_id), Some(course_id), Some(lesson_id), Some(completed)) = (
            normalize_id(input.user_id),
            normalize_id(input.course_id),
            normalize_id(input.lesson_id),
            input.completed,
        ) else {
            return Err(ProgressError::MissingFields);
        };

        let total_lessons = self
            .catalog
            .total_lessons(&course_id)
            .ok_or(ProgressError::CourseNotFound)?;

        if !self.catalog.contains_lesson(&course_id, &lesson_id) {
            return Err(ProgressError::LessonNotFound);
        }

        let key = CourseKey::new(user_id, course_id).lesson(lesson_id);
        let lesson = LessonProgress::new(key, completed);

        let aggregate = self.repo.record(&lesson, total_lessons).await?;

        tracing::info!(
            user_id = %lesson.user_id,
            course_id = %lesson.course_id,
            lesson_id = %lesson.lesson_id,
            completed,
            progress = aggregate.progress_percentage.value(),
            "Lesson progress recorded"
        );

        Ok(RecordLessonOutput {
            progress_percentage: aggregate.progress_percentage,
        })
    }
}
