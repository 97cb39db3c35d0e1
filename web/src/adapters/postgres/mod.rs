//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod resume_item_repo;
pub mod resume_repo;
pub mod schema;


pub use resume_item_repo::PostgresResumeItemRepository;
pub use resume_repo::PostgresResumeRepository;
pub use schema::ensure_schema;
