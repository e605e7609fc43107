//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{GetProgressInput, RecordLessonInput};
use crate::domain::catalog::Lesson;
use crate::domain::entities::LessonProgress;
use crate::domain::value_objects::Percentage;

/// Identifier as sent by clients: a JSON string or an integer
#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Integer(i64),
}

/// Deserialize an optional id, normalising integers to their decimal form
fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<IdValue>::deserialize(deserializer)?.map(|value| match value {
            IdValue::Text(text) => text,
            IdValue::Integer(number) => number.to_string(),
        }),
    )
}

// ============================================================================
// Update Progress
// ============================================================================

/// Request for POST /update-progress
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProgressRequest {
    #[serde(default, deserialize_with = "string_or_integer")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_integer")]
    pub course_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_integer")]
    pub lesson_id: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<UpdateProgressRequest> for RecordLessonInput {
    fn from(req: UpdateProgressRequest) -> Self {
        RecordLessonInput {
            user_id: req.user_id,
            course_id: req.course_id,
            lesson_id: req.lesson_id,
            completed: req.completed,
        }
    }
}

/// Response for POST /update-progress
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressResponse {
    pub success: bool,
    pub message: &'static str,
    pub progress_percentage: Percentage,
}

// ============================================================================
// Get Progress
// ============================================================================

/// Query for GET /get-progress
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressQuery {
    pub user_id: Option<String>,
    pub course_id: Option<String>,
}

impl From<ProgressQuery> for GetProgressInput {
    fn from(query: ProgressQuery) -> Self {
        GetProgressInput {
            user_id: query.user_id,
            course_id: query.course_id,
        }
    }
}

/// One lesson record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgressDto {
    pub user_id: String,
    pub course_id: String,
    pub lesson_id: String,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<LessonProgress> for LessonProgressDto {
    fn from(lesson: LessonProgress) -> Self {
        Self {
            user_id: lesson.user_id,
            course_id: lesson.course_id,
            lesson_id: lesson.lesson_id,
            completed: lesson.completed,
            updated_at: lesson.updated_at,
        }
    }
}

/// Response for GET /get-progress
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProgressResponse {
    pub success: bool,
    pub progress: Vec<LessonProgressDto>,
    pub progress_percentage: Percentage,
}

// ============================================================================
// Course Content
// ============================================================================

/// Query for GET /get-course-content
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseContentQuery {
    pub course_id: Option<String>,
}

/// One lesson of a course
#[derive(Debug, Clone, Serialize)]
pub struct LessonDto {
    pub id: u32,
    pub title: String,
    pub content: String,
}

impl From<&Lesson> for LessonDto {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title.clone(),
            content: lesson.content.clone(),
        }
    }
}

/// Response for GET /get-course-content
#[derive(Debug, Clone, Serialize)]
pub struct CourseContentResponse {
    pub success: bool,
    pub lessons: Vec<LessonDto>,
}
