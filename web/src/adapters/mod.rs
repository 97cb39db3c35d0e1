//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod templates;

pub use postgres::{ensure_schema, PostgresResumeItemRepository, PostgresResumeRepository};
pub use templates::MiniJinjaRenderer;
