//! Application Layer
//!
//! Use cases for the progress domain.

pub mod get_course_content;
pub mod get_progress;
pub mod record_lesson;

// Re-exports
pub use get_course_content::GetCourseContentUseCase;
pub use get_progress::{GetProgressInput, GetProgressOutput, GetProgressUseCase};
pub use record_lesson::{RecordLessonInput, RecordLessonOutput, RecordLessonUseCase};
