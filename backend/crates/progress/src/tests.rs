//! Unit tests for Progress crate
//! Ledger and query semantics against the in-memory repository, plus the HTTP surface.

#[cfg(test)]
mod ledger_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::application::{
        GetProgressInput, GetProgressUseCase, RecordLessonInput, RecordLessonUseCase,
    };
    use crate::domain::catalog::{CourseCatalog, Lesson};
    use crate::domain::repository::ProgressRepository;
    use crate::domain::value_objects::CourseKey;
    use crate::error::ProgressError;
    use crate::infra::memory::InMemoryProgressRepository;
    use kernel::error::kind::ErrorKind;

    struct Fixture {
        repo: Arc<InMemoryProgressRepository>,
        record: RecordLessonUseCase<InMemoryProgressRepository>,
        query: GetProgressUseCase<InMemoryProgressRepository>,
    }

    fn fixture_with(catalog: CourseCatalog) -> Fixture {
        let repo = Arc::new(InMemoryProgressRepository::new());
        let catalog = Arc::new(catalog);

        Fixture {
            record: RecordLessonUseCase::new(repo.clone(), catalog),
            query: GetProgressUseCase::new(repo.clone()),
            repo,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(CourseCatalog::builtin())
    }

    fn lesson(user: &str, course: &str, lesson: &str, completed: bool) -> RecordLessonInput {
        RecordLessonInput {
            user_id: Some(user.into()),
            course_id: Some(course.into()),
            lesson_id: Some(lesson.into()),
            completed: Some(completed),
        }
    }

    fn query(user: &str, course: &str) -> GetProgressInput {
        GetProgressInput {
            user_id: Some(user.into()),
            course_id: Some(course.into()),
        }
    }

    async fn percentage(f: &Fixture, input: RecordLessonInput) -> u8 {
        f.record.execute(input).await.unwrap().progress_percentage.value()
    }

    #[tokio::test]
    async fn test_complete_then_uncomplete() {
        let f = fixture();

        assert_eq!(percentage(&f, lesson("u1", "1", "1", true)).await, 25);
        assert_eq!(percentage(&f, lesson("u1", "1", "2", true)).await, 50);
        assert_eq!(percentage(&f, lesson("u1", "1", "1", false)).await, 25);

        let output = f.query.execute(query("u1", "1")).await.unwrap();
        assert_eq!(output.progress_percentage.value(), 25);

        let ids: Vec<_> = output.lessons.iter().map(|l| l.lesson_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(!output.lessons[0].completed);
        assert!(output.lessons[1].completed);
    }

    #[tokio::test]
    async fn test_repeated_write_is_idempotent() {
        let f = fixture();

        let first = percentage(&f, lesson("u1", "2", "3", true)).await;
        let second = percentage(&f, lesson("u1", "2", "3", true)).await;
        assert_eq!(first, second);

        let output = f.query.execute(query("u1", "2")).await.unwrap();
        assert_eq!(output.lessons.len(), 1);
        assert_eq!(output.progress_percentage.value(), 25);
    }

    #[tokio::test]
    async fn test_incomplete_lesson_is_recorded_but_not_counted() {
        let f = fixture();

        assert_eq!(percentage(&f, lesson("u1", "3", "4", false)).await, 0);

        let output = f.query.execute(query("u1", "3")).await.unwrap();
        assert_eq!(output.lessons.len(), 1);
        assert_eq!(output.progress_percentage.value(), 0);
    }

    #[tokio::test]
    async fn test_all_lessons_complete() {
        let f = fixture();
        for id in ["1", "2", "3", "4"] {
            f.record.execute(lesson("u1", "4", id, true)).await.unwrap();
        }

        let output = f.query.execute(query("u1", "4")).await.unwrap();
        assert_eq!(output.progress_percentage.value(), 100);
    }

    #[tokio::test]
    async fn test_empty_query_defaults_to_zero() {
        let f = fixture();
        let output = f.query.execute(query("nobody", "1")).await.unwrap();

        assert!(output.lessons.is_empty());
        assert_eq!(output.progress_percentage.value(), 0);
    }

    #[tokio::test]
    async fn test_users_and_courses_are_isolated() {
        let f = fixture();
        f.record.execute(lesson("u1", "1", "1", true)).await.unwrap();
        f.record.execute(lesson("u2", "1", "1", true)).await.unwrap();
        f.record.execute(lesson("u2", "1", "2", true)).await.unwrap();
        f.record.execute(lesson("u1", "2", "1", true)).await.unwrap();

        let u1 = f.query.execute(query("u1", "1")).await.unwrap();
        let u2 = f.query.execute(query("u2", "1")).await.unwrap();
        assert_eq!(u1.progress_percentage.value(), 25);
        assert_eq!(u1.lessons.len(), 1);
        assert_eq!(u2.progress_percentage.value(), 50);
    }

    #[tokio::test]
    async fn test_denominator_comes_from_catalog() {
        let catalog = CourseCatalog::new().with_course(
            "short",
            vec![
                Lesson::new(1, "One", "..."),
                Lesson::new(2, "Two", "..."),
                Lesson::new(3, "Three", "..."),
            ],
        );
        let f = fixture_with(catalog);

        assert_eq!(percentage(&f, lesson("u1", "short", "1", true)).await, 33);
        assert_eq!(percentage(&f, lesson("u1", "short", "2", true)).await, 67);
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let f = fixture();

        let mut no_completed = lesson("u1", "1", "1", true);
        no_completed.completed = None;

        let mut blank_user = lesson("u1", "1", "1", true);
        blank_user.user_id = Some("   ".into());

        for input in [RecordLessonInput::default(), no_completed, blank_user] {
            let err = f.record.execute(input).await.unwrap_err();
            assert!(matches!(err, ProgressError::MissingFields));
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }

        let err = f
            .query
            .execute(GetProgressInput {
                user_id: Some("u1".into()),
                course_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressError::MissingCourseKey));
    }

    #[tokio::test]
    async fn test_unknown_course_and_lesson() {
        let f = fixture();

        let err = f.record.execute(lesson("u1", "99", "1", true)).await.unwrap_err();
        assert!(matches!(err, ProgressError::CourseNotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = f.record.execute(lesson("u1", "1", "5", true)).await.unwrap_err();
        assert!(matches!(err, ProgressError::LessonNotFound));

        // Nothing was written
        let key = CourseKey::new("u1", "1");
        let snapshot = f.repo.find_progress(&key).await.unwrap();
        assert!(snapshot.lessons.is_empty());
        assert!(snapshot.aggregate.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writes_keep_aggregate_consistent() {
        let f = Arc::new(fixture());

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let f = f.clone();
                tokio::spawn(async move {
                    let lesson_id = ((i % 4) + 1).to_string();
                    let completed = (i / 4) % 2 == 0;
                    f.record
                        .execute(lesson("u1", "1", &lesson_id, completed))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let output = f.query.execute(query("u1", "1")).await.unwrap();
        let completed = output.lessons.iter().filter(|l| l.completed).count() as u64;

        assert_eq!(output.lessons.len(), 4);
        assert_eq!(
            output.progress_percentage.value() as u64,
            (200 * completed + 4) / 8
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_same_lesson_settles_consistently() {
        let f = Arc::new(fixture());
        f.record.execute(lesson("u1", "1", "2", true)).await.unwrap();

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let f = f.clone();
                tokio::spawn(async move {
                    f.record
                        .execute(lesson("u1", "1", "1", i % 2 == 0))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let output = f.query.execute(query("u1", "1")).await.unwrap();
        let lesson_one = output
            .lessons
            .iter()
            .find(|l| l.lesson_id == "1")
            .unwrap();

        let expected = if lesson_one.completed { 50 } else { 25 };
        assert_eq!(output.progress_percentage.value(), expected);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_queries_during_writes_see_matching_percentage() {
        let f = Arc::new(fixture());
        let stop = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..3)
            .map(|_| {
                let f = f.clone();
                let stop = stop.clone();
                tokio::spawn(async move {
                    while !stop.load(Ordering::Acquire) {
                        let output = f.query.execute(query("u1", "1")).await.unwrap();
                        let completed = output.lessons.iter().filter(|l| l.completed).count();
                        let expected = if completed == 1 { 25 } else { 0 };
                        assert_eq!(output.progress_percentage.value(), expected);
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect();

        for i in 0..2000 {
            f.record
                .execute(lesson("u1", "1", "1", i % 2 == 0))
                .await
                .unwrap();
        }
        stop.store(true, Ordering::Release);

        for reader in readers {
            reader.await.unwrap();
        }
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::domain::catalog::CourseCatalog;
    use crate::infra::memory::InMemoryProgressRepository;
    use crate::presentation::router::progress_router_generic;

    fn app() -> Router {
        progress_router_generic(
            InMemoryProgressRepository::new(),
            Arc::new(CourseCatalog::builtin()),
        )
    }

    fn update(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/update-progress")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_update_and_query_flow() {
        let app = app();

        let (status, body) = send(
            &app,
            update(json!({"userId": "u1", "courseId": "1", "lessonId": 1, "completed": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Progress updated successfully",
                "progressPercentage": 25
            })
        );

        send(
            &app,
            update(json!({"userId": "u1", "courseId": "1", "lessonId": 2, "completed": true})),
        )
        .await;
        let (_, body) = send(
            &app,
            update(json!({"userId": "u1", "courseId": "1", "lessonId": 1, "completed": false})),
        )
        .await;
        assert_eq!(body["progressPercentage"], 25);

        let (status, body) = send(&app, get("/get-progress?userId=u1&courseId=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["progressPercentage"], 25);

        let progress = body["progress"].as_array().unwrap();
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0]["lessonId"], "1");
        assert_eq!(progress[0]["completed"], false);
        assert_eq!(progress[1]["lessonId"], "2");
        assert_eq!(progress[1]["completed"], true);
        assert!(progress[0]["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_update_missing_completed_is_400() {
        let (status, body) = send(
            &app(),
            update(json!({"userId": "u1", "courseId": "1", "lessonId": "1"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "message": "All fields are required"}));
    }

    #[tokio::test]
    async fn test_update_unknown_course_is_404() {
        let (status, body) = send(
            &app(),
            update(json!({"userId": "u1", "courseId": "9", "lessonId": "1", "completed": true})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Course not found");
    }

    #[tokio::test]
    async fn test_get_progress_empty() {
        let (status, body) = send(&app(), get("/get-progress?userId=u9&courseId=3")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "progress": [], "progressPercentage": 0})
        );
    }

    #[tokio::test]
    async fn test_get_progress_missing_params() {
        let (status, body) = send(&app(), get("/get-progress?userId=u1")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User ID and Course ID are required");
    }

    #[tokio::test]
    async fn test_course_content() {
        let (status, body) = send(&app(), get("/get-course-content?courseId=3")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let lessons = body["lessons"].as_array().unwrap();
        assert_eq!(lessons.len(), 4);
        assert_eq!(lessons[0]["id"], 1);
        assert_eq!(lessons[0]["title"], "Introduction to JavaScript");
        assert!(lessons[0]["content"].is_string());
    }

    #[tokio::test]
    async fn test_course_content_unknown() {
        let (status, body) = send(&app(), get("/get-course-content?courseId=7")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "message": "Course not found"}));
    }

    #[tokio::test]
    async fn test_malformed_body_uses_failure_envelope() {
        let req = Request::builder()
            .method("POST")
            .uri("/update-progress")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"userId\":"))
            .unwrap();

        let (status, body) = send(&app(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
