//! Get Course Content Use Case

use std::sync::Arc;

use crate::domain::catalog::{CourseCatalog, Lesson};
use crate::domain::value_objects::normalize_id;
use crate::error::{ProgressError, ProgressResult};

/// Get course content use case
pub struct GetCourseContentUseCase {
    catalog: Arc<CourseCatalog>,
}

impl GetCourseContentUseCase {
    pub fn new(catalog: Arc<CourseCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, course_id: Option<String>) -> ProgressResult<&[Lesson]> {
        let course_id = normalize_id(course_id).ok_or(ProgressError::MissingCourseId)?;

        self.catalog
            .lessons(&course_id)
            .ok_or(ProgressError::CourseNotFound)
    }
}
