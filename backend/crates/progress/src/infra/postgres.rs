//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{CourseAggregate, LessonProgress, ProgressSnapshot};
use crate::domain::repository::ProgressRepository;
use crate::domain::value_objects::{CourseKey, Percentage};
use crate::error::ProgressResult;

/// PostgreSQL-backed progress repository
#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProgressRepository for PgProgressRepository {
    async fn record(
        &self,
        lesson: &LessonProgress,
        total_lessons: u64,
    ) -> ProgressResult<CourseAggregate> {
        let key = lesson.course_key();
        let mut tx = self.pool.begin().await?;

        // Serialises writers of the same (user, course); released at commit/rollback
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(key.lock_name())
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO lesson_progress (
                user_id,
                course_id,
                lesson_id,
                completed,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, course_id, lesson_id) DO UPDATE
            SET completed = EXCLUDED.completed,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&lesson.user_id)
        .bind(&lesson.course_id)
        .bind(&lesson.lesson_id)
        .bind(lesson.completed)
        .bind(lesson.updated_at)
        .execute(&mut *tx)
        .await?;

        let completed: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM lesson_progress
            WHERE user_id = $1 AND course_id = $2 AND completed
            "#,
        )
        .bind(&key.user_id)
        .bind(&key.course_id)
        .fetch_one(&mut *tx)
        .await?;

        let aggregate = CourseAggregate::recompute(&key, completed.max(0) as u64, total_lessons);

        sqlx::query(
            r#"
            INSERT INTO course_progress (
                user_id,
                course_id,
                progress_percentage,
                updated_at
            ) VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, course_id) DO UPDATE
            SET progress_percentage = EXCLUDED.progress_percentage,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&aggregate.user_id)
        .bind(&aggregate.course_id)
        .bind(i16::from(aggregate.progress_percentage))
        .bind(aggregate.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(aggregate)
    }

    async fn find_progress(&self, key: &CourseKey) -> ProgressResult<ProgressSnapshot> {
        let mut tx = self.pool.begin().await?;

        // One snapshot for both reads; `record` commits lesson and aggregate together
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let lessons = sqlx::query_as::<_, LessonProgressRow>(
            r#"
            SELECT
                user_id,
                course_id,
                lesson_id,
                completed,
                updated_at
            FROM lesson_progress
            WHERE user_id = $1 AND course_id = $2
            ORDER BY lesson_id
            "#,
        )
        .bind(&key.user_id)
        .bind(&key.course_id)
        .fetch_all(&mut *tx)
        .await?;

        let aggregate = sqlx::query_as::<_, CourseProgressRow>(
            r#"
            SELECT
                user_id,
                course_id,
                progress_percentage,
                updated_at
            FROM course_progress
            WHERE user_id = $1 AND course_id = $2
            "#,
        )
        .bind(&key.user_id)
        .bind(&key.course_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ProgressSnapshot {
            lessons: lessons
                .into_iter()
                .map(LessonProgressRow::into_lesson)
                .collect(),
            aggregate: aggregate.map(CourseProgressRow::into_aggregate),
        })
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct LessonProgressRow {
    user_id: String,
    course_id: String,
    lesson_id: String,
    completed: bool,
    updated_at: DateTime<Utc>,
}

impl LessonProgressRow {
    fn into_lesson(self) -> LessonProgress {
        LessonProgress {
            user_id: self.user_id,
            course_id: self.course_id,
            lesson_id: self.lesson_id,
            completed: self.completed,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CourseProgressRow {
    user_id: String,
    course_id: String,
    progress_percentage: i16,
    updated_at: DateTime<Utc>,
}

impl CourseProgressRow {
    fn into_aggregate(self) -> CourseAggregate {
        CourseAggregate {
            user_id: self.user_id,
            course_id: self.course_id,
            progress_percentage: Percentage::from_db(self.progress_percentage),
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::domain::value_objects::CourseKey;

    // Needs a reachable Postgres: DATABASE_URL=... cargo test -p progress -- --ignored
    async fn repo() -> Arc<PgProgressRepository> {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPoolOptions::new()
            .max_connections(8)
            .connect(&url)
            .await
            .unwrap();
        sqlx::migrate!("../../../database/migrations")
            .run(&pool)
            .await
            .unwrap();
        Arc::new(PgProgressRepository::new(pool))
    }

    fn unique_user() -> String {
        format!("pg-test-{}", Utc::now().timestamp_nanos_opt().unwrap_or_default())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    #[ignore]
    async fn test_concurrent_records_commit_consistent_aggregate() {
        let repo = repo().await;
        let key = CourseKey::new(unique_user(), "1");

        let handles: Vec<_> = (0..40)
            .map(|i| {
                let repo = repo.clone();
                let lesson_key = key.lesson(((i % 4) + 1).to_string());
                tokio::spawn(async move {
                    let lesson = LessonProgress::new(lesson_key, (i / 4) % 2 == 0);
                    repo.record(&lesson, 4).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let snapshot = repo.find_progress(&key).await.unwrap();
        let completed = snapshot.lessons.iter().filter(|l| l.completed).count() as u64;

        assert_eq!(snapshot.lessons.len(), 4);
        assert_eq!(
            snapshot.aggregate.unwrap().progress_percentage,
            Percentage::from_counts(completed, 4)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    #[ignore]
    async fn test_reads_never_see_half_a_record() {
        let repo = repo().await;
        let key = CourseKey::new(unique_user(), "1");

        let writer = {
            let repo = repo.clone();
            let key = key.clone();
            tokio::spawn(async move {
                for i in 0..50 {
                    let lesson = LessonProgress::new(key.lesson("1"), i % 2 == 0);
                    repo.record(&lesson, 4).await.unwrap();
                }
            })
        };

        while !writer.is_finished() {
            let snapshot = repo.find_progress(&key).await.unwrap();
            if let Some(aggregate) = snapshot.aggregate {
                let completed = snapshot.lessons.iter().filter(|l| l.completed).count() as u64;
                assert_eq!(
                    aggregate.progress_percentage,
                    Percentage::from_counts(completed, 4)
                );
            }
        }

        writer.await.unwrap();
    }
}
