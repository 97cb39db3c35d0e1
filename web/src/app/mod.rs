//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod resume_service;

pub use resume_service::ResumeService;
