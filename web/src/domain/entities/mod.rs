//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod resume;
pub mod resume_item;
pub mod user;

pub use resume::{NewResume, Resume, ResumeId, ResumeSummary};
pub use resume_item::{NewResumeItem, ResumeItem, ResumeItemFields, ResumeItemId};
pub use user::{CurrentUser, UserId};
