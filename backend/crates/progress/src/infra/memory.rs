//! In-Memory Repository Implementation
//!
//! Lessons and aggregates live in separate tables, each behind its own lock,
//! so a `record` spans several critical sections. A `KeyedMutex` on the
//! course key makes the whole sequence one unit per (user, course), and
//! `find_progress` takes the same guard to read both tables.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use kernel::lock::KeyedMutex;

use crate::domain::entities::{CourseAggregate, LessonProgress, ProgressSnapshot};
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::CourseKey;
use crate::error::ProgressResult;

type LessonTable = HashMap<CourseKey, BTreeMap<String, LessonProgress>>;

/// In-memory progress repository
#[derive(Clone, Default)]
pub struct InMemoryProgressRepository {
    lessons: Arc<RwLock<LessonTable>>,
    aggregates: Arc<RwLock<HashMap<CourseKey, CourseAggregate>>>,
    locks: Arc<KeyedMutex<CourseKey>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn upsert_lesson(&self, key: &CourseKey, lesson: &LessonProgress) {
        self.lessons
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.clone())
            .or_default()
            .insert(lesson.lesson_id.clone(), lesson.clone());
    }

    fn count_completed(&self, key: &CourseKey) -> u64 {
        self.lessons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|lessons| lessons.values().filter(|l| l.completed).count() as u64)
            .unwrap_or(0)
    }

    fn upsert_aggregate(&self, key: &CourseKey, aggregate: &CourseAggregate) {
        self.aggregates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), aggregate.clone());
    }
}

impl ProgressRepository for InMemoryProgressRepository {
    async fn record(
        &self,
        lesson: &LessonProgress,
        total_lessons: u64,
    ) -> ProgressResult<CourseAggregate> {
        let key = lesson.course_key();
        let _guard = self.locks.lock(key.clone()).await;

        self.upsert_lesson(&key, lesson);
        // Suspend between steps, as a store round-trip would
        tokio::task::yield_now().await;

        let completed = self.count_completed(&key);
        let aggregate = CourseAggregate::recompute(&key, completed, total_lessons);
        self.upsert_aggregate(&key, &aggregate);

        Ok(aggregate)
    }

    async fn find_progress(&self, key: &CourseKey) -> ProgressResult<ProgressSnapshot> {
        // Same guard as `record`, so a read never lands between its steps
        let _guard = self.locks.lock(key.clone()).await;

        let lessons = self
            .lessons
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|lessons| lessons.values().cloned().collect())
            .unwrap_or_default();

        let aggregate = self
            .aggregates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned();

        Ok(ProgressSnapshot { lessons, aggregate })
    }
}
