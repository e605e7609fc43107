//! Infrastructure Layer
//!
//! Database implementations of the domain repositories.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProgressRepository;
pub use postgres::PgProgressRepository;
