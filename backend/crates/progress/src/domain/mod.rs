//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (LessonProgress, CourseAggregate)
//! - Domain value objects (CourseKey, LessonKey, Percentage)
//! - Domain services (percentage computation)
//! - Course catalog (static content, lesson totals)
//! - Repository traits (interfaces)

pub mod catalog;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
