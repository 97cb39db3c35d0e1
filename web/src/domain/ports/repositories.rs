//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{
    NewResume, NewResumeItem, Resume, ResumeId, ResumeItem, ResumeItemFields, ResumeItemId,
    UserId,
};
use crate::error::DomainError;

/// Repository for Resume entities
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Find a resume by ID, regardless of owner
    async fn find_by_id(&self, id: &ResumeId) -> Result<Option<Resume>, DomainError>;

    /// Find all resumes owned by a user, ordered by title ascending
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Resume>, DomainError>;

    /// Create a new resume
    async fn create(&self, resume: &NewResume) -> Result<Resume, DomainError>;

    /// Rename a resume
    async fn update_title(&self, id: &ResumeId, title: &str) -> Result<Resume, DomainError>;
}

/// Repository for ResumeItem entities
///
/// Single-item lookups are always scoped to the parent resume so that an item
/// id can never be resolved through the wrong resume.
#[async_trait]
pub trait ResumeItemRepository: Send + Sync {
    /// Find the items of a resume, ordered by start date descending
    async fn find_by_resume(&self, resume_id: &ResumeId) -> Result<Vec<ResumeItem>, DomainError>;

    /// Find an item by ID within a resume
    async fn find_in_resume(
        &self,
        resume_id: &ResumeId,
        id: &ResumeItemId,
    ) -> Result<Option<ResumeItem>, DomainError>;

    /// Count items per resume. Resumes without items are absent from the map.
    async fn count_by_resumes(
        &self,
        resume_ids: &[ResumeId],
    ) -> Result<HashMap<ResumeId, u64>, DomainError>;

    /// Create a new item
    async fn create(&self, item: &NewResumeItem) -> Result<ResumeItem, DomainError>;

    /// Overwrite the editable fields of an item
    async fn update(
        &self,
        id: &ResumeItemId,
        fields: &ResumeItemFields,
    ) -> Result<ResumeItem, DomainError>;

    /// Delete an item
    async fn delete(&self, id: &ResumeItemId) -> Result<(), DomainError>;
}
