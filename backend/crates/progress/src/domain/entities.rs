//! Domain Entities
//!
//! Core business entities for the progress domain.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{CourseKey, LessonKey, Percentage};

/// LessonProgress entity - completion of one lesson by one user
///
/// At most one per (userId, courseId, lessonId); updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonProgress {
    pub user_id: String,
    pub course_id: String,
    pub lesson_id: String,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}

impl LessonProgress {
    /// Create a new lesson record stamped now
    pub fn new(key: LessonKey, completed: bool) -> Self {
        Self {
            user_id: key.course.user_id,
            course_id: key.course.course_id,
            lesson_id: key.lesson_id,
            completed,
            updated_at: Utc::now(),
        }
    }

    pub fn course_key(&self) -> CourseKey {
        CourseKey::new(&self.user_id, &self.course_id)
    }
}

/// CourseAggregate entity - derived completion of a course by one user
///
/// Never edited directly; rewritten on every lesson write for its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseAggregate {
    pub user_id: String,
    pub course_id: String,
    pub progress_percentage: Percentage,
    pub updated_at: DateTime<Utc>,
}

impl CourseAggregate {
    /// Recompute from the completed count and the course's fixed lesson total
    pub fn recompute(key: &CourseKey, completed: u64, total_lessons: u64) -> Self {
        Self {
            user_id: key.user_id.clone(),
            course_id: key.course_id.clone(),
            progress_percentage: Percentage::from_counts(completed, total_lessons),
            updated_at: Utc::now(),
        }
    }
}

/// Lessons and aggregate for one course key, read from the same state
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
    /// Ordered by lesson id
    pub lessons: Vec<LessonProgress>,
    pub aggregate: Option<CourseAggregate>,
}
