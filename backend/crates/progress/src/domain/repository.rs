//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{CourseAggregate, LessonProgress, ProgressSnapshot};
use crate::domain::value_objects::CourseKey;
use crate::error::ProgressResult;

/// Progress repository trait
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Upsert a lesson record and rewrite its course aggregate
    ///
    /// One atomic unit per course key: upsert the lesson, count completed
    /// lessons for the key, recompute against `total_lessons`, upsert the
    /// aggregate. Concurrent calls for the same course key must not
    /// interleave.
    async fn record(
        &self,
        lesson: &LessonProgress,
        total_lessons: u64,
    ) -> ProgressResult<CourseAggregate>;

    /// Lesson records and aggregate for a course key
    ///
    /// Both halves come from one consistent state: never a lesson set from
    /// before a `record` paired with the aggregate from after it.
    async fn find_progress(&self, key: &CourseKey) -> ProgressResult<ProgressSnapshot>;
}
