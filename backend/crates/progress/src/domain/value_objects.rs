//! Domain Value Objects
//!
//! Immutable value types for the progress domain.

use serde::Serialize;

use crate::domain::services::progress_percentage;

/// (userId, courseId): one aggregate is kept per key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey {
    pub user_id: String,
    pub course_id: String,
}

impl CourseKey {
    pub fn new(user_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            course_id: course_id.into(),
        }
    }

    /// Text used to derive the Postgres advisory lock for this key
    pub fn lock_name(&self) -> String {
        format!("{}\u{1f}{}", self.user_id, self.course_id)
    }

    pub fn lesson(&self, lesson_id: impl Into<String>) -> LessonKey {
        LessonKey {
            course: self.clone(),
            lesson_id: lesson_id.into(),
        }
    }
}

/// (userId, courseId, lessonId): natural key of a lesson record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonKey {
    pub course: CourseKey,
    pub lesson_id: String,
}

/// Course completion, 0–100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);

    /// Derive from completed and total lesson counts
    pub fn from_counts(completed: u64, total: u64) -> Self {
        Self(progress_percentage(completed, total))
    }

    /// Restore a stored value, clamped to 0–100
    pub fn from_db(value: i16) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<Percentage> for i16 {
    fn from(p: Percentage) -> Self {
        p.0 as i16
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Normalise a boundary identifier: trimmed, `None` when blank
pub fn normalize_id(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        None
    } else if trimmed.len() == raw.len() {
        Some(raw)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id(Some("u1".into())), Some("u1".into()));
        assert_eq!(normalize_id(Some("  u1 ".into())), Some("u1".into()));
        assert_eq!(normalize_id(Some("   ".into())), None);
        assert_eq!(normalize_id(Some(String::new())), None);
        assert_eq!(normalize_id(None), None);
    }

    #[test]
    fn test_percentage_from_db_clamps() {
        assert_eq!(Percentage::from_db(-5).value(), 0);
        assert_eq!(Percentage::from_db(42).value(), 42);
        assert_eq!(Percentage::from_db(300).value(), 100);
    }

    #[test]
    fn test_lock_name_separates_fields() {
        let a = CourseKey::new("u1", "23");
        let b = CourseKey::new("u12", "3");
        assert_ne!(a.lock_name(), b.lock_name());
    }
}
