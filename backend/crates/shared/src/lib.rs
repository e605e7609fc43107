//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by the auth and progress
//! contexts:
//! - Common error types, result aliases and the JSON failure envelope
//! - Per-key async serialization primitive
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod lock;
