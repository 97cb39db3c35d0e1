//! Resume service
//!
//! Use cases behind the resume pages: owner-scoped listing, unscoped resume
//! lookups, parent-scoped item lookups, and the create/update/delete
//! sequences. Handlers own the GET/POST branching; this service owns what
//! happens to the data.

use std::sync::Arc;

use crate::domain::entities::{
    NewResume, NewResumeItem, Resume, ResumeId, ResumeItem, ResumeItemFields, ResumeItemId,
    ResumeSummary, UserId,
};
use crate::domain::ports::{ResumeItemRepository, ResumeRepository};
use crate::error::AppError;

/// Service for managing resumes and their items
pub struct ResumeService {
    resumes: Arc<dyn ResumeRepository>,
    items: Arc<dyn ResumeItemRepository>,
    enforce_ownership: bool,
}

impl ResumeService {
    pub fn new(
        resumes: Arc<dyn ResumeRepository>,
        items: Arc<dyn ResumeItemRepository>,
    ) -> Self {
        Self {
            resumes,
            items,
            enforce_ownership: false,
        }
    }

    /// Treat resumes owned by someone other than the caller as missing.
    ///
    /// Off by default: lookups by id are not restricted to the owner.
    pub fn with_ownership_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_ownership = enforce;
        self
    }

    /// The caller's resumes, ordered by title, each with its item count
    pub async fn list_resumes(&self, owner: &UserId) -> Result<Vec<ResumeSummary>, AppError> {
        let resumes = self.resumes.find_by_owner(owner).await?;
        let ids: Vec<ResumeId> = resumes.iter().map(|r| r.id).collect();
        let counts = self.items.count_by_resumes(&ids).await?;

        Ok(resumes
            .into_iter()
            .map(|resume| {
                let num_items = counts.get(&resume.id).copied().unwrap_or(0);
                ResumeSummary { resume, num_items }
            })
            .collect())
    }

    /// Look up a resume by id.
    ///
    /// A miss is `ResumeDoesNotExist`, which is reported as a server error
    /// rather than a 404.
    pub async fn get_resume(&self, caller: &UserId, id: &ResumeId) -> Result<Resume, AppError> {
        let resume = self
            .resumes
            .find_by_id(id)
            .await?
            .ok_or(AppError::ResumeDoesNotExist(*id))?;

        if self.enforce_ownership && !resume.is_owned_by(caller) {
            tracing::warn!(resume_id = %id, user = %caller, "Rejected access to another user's resume");
            return Err(AppError::NotFound(format!("Resume {} not found", id)));
        }

        Ok(resume)
    }

    /// A resume and its items, newest start date first
    pub async fn get_resume_with_items(
        &self,
        caller: &UserId,
        id: &ResumeId,
    ) -> Result<(Resume, Vec<ResumeItem>), AppError> {
        let resume = self.get_resume(caller, id).await?;
        let items = self.items.find_by_resume(&resume.id).await?;
        Ok((resume, items))
    }

    /// Create a resume owned by `owner`
    pub async fn create_resume(&self, owner: &UserId, title: String) -> Result<Resume, AppError> {
        let resume = self
            .resumes
            .create(&NewResume {
                owner: owner.clone(),
                title,
            })
            .await?;

        tracing::info!(resume_id = %resume.id, user = %owner, "Created resume");
        Ok(resume)
    }

    /// Rename an existing resume
    pub async fn rename_resume(&self, resume: &Resume, title: &str) -> Result<Resume, AppError> {
        let renamed = self.resumes.update_title(&resume.id, title).await?;

        tracing::info!(resume_id = %renamed.id, "Renamed resume");
        Ok(renamed)
    }

    /// Look up an item within its parent resume.
    ///
    /// Items that exist under a different resume are reported as not found.
    pub async fn get_item(
        &self,
        resume: &Resume,
        item_id: &ResumeItemId,
    ) -> Result<ResumeItem, AppError> {
        self.items
            .find_in_resume(&resume.id, item_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Resume item {} not found in resume {}",
                    item_id, resume.id
                ))
            })
    }

    /// Attach a new item to `resume`. The parent always comes from the
    /// resume passed in, never from submitted data.
    pub async fn create_item(
        &self,
        resume: &Resume,
        fields: ResumeItemFields,
    ) -> Result<ResumeItem, AppError> {
        let item = self
            .items
            .create(&NewResumeItem {
                resume_id: resume.id,
                fields,
            })
            .await?;

        tracing::info!(resume_id = %resume.id, item_id = %item.id, "Created resume item");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        item: &ResumeItem,
        fields: &ResumeItemFields,
    ) -> Result<ResumeItem, AppError> {
        let updated = self.items.update(&item.id, fields).await?;

        tracing::info!(resume_id = %item.resume_id, item_id = %item.id, "Updated resume item");
        Ok(updated)
    }

    pub async fn delete_item(&self, item: &ResumeItem) -> Result<(), AppError> {
        self.items.delete(&item.id).await?;

        tracing::info!(resume_id = %item.resume_id, item_id = %item.id, "Deleted resume item");
        Ok(())
    }
}
