//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! Ids are handed out sequentially from 1, like a fresh database sequence.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    NewResume, NewResumeItem, Resume, ResumeId, ResumeItem, ResumeItemFields, ResumeItemId,
    UserId,
};
use crate::domain::ports::{RenderError, Renderer, ResumeItemRepository, ResumeRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Resume Repository
// ============================================================================

pub struct InMemoryResumeRepository {
    resumes: Arc<RwLock<HashMap<ResumeId, Resume>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryResumeRepository {
    fn default() -> Self {
        Self {
            resumes: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryResumeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a resume for testing
    pub fn with_resume(self, resume: Resume) -> Self {
        self.next_id.fetch_max(resume.id.0 + 1, Ordering::SeqCst);
        self.resumes.write().unwrap().insert(resume.id, resume);
        self
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeRepository {
    async fn find_by_id(&self, id: &ResumeId) -> Result<Option<Resume>, DomainError> {
        let resumes = self.resumes.read().unwrap();
        Ok(resumes.get(id).cloned())
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Resume>, DomainError> {
        let resumes = self.resumes.read().unwrap();
        let mut owned: Vec<Resume> = resumes
            .values()
            .filter(|r| r.is_owned_by(owner))
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn create(&self, new_resume: &NewResume) -> Result<Resume, DomainError> {
        let resume = Resume {
            id: ResumeId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            owner: new_resume.owner.clone(),
            title: new_resume.title.clone(),
        };
        self.resumes
            .write()
            .unwrap()
            .insert(resume.id, resume.clone());
        Ok(resume)
    }

    async fn update_title(&self, id: &ResumeId, title: &str) -> Result<Resume, DomainError> {
        let mut resumes = self.resumes.write().unwrap();
        let resume = resumes
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Resume {}", id)))?;
        resume.title = title.to_string();
        Ok(resume.clone())
    }
}

// ============================================================================
// In-Memory Resume Item Repository
// ============================================================================

pub struct InMemoryResumeItemRepository {
    items: Arc<RwLock<HashMap<ResumeItemId, ResumeItem>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryResumeItemRepository {
    fn default() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryResumeItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an item under `resume_id`, taking the next id
    pub fn with_item(self, resume_id: ResumeId, fields: ResumeItemFields) -> Self {
        let item = build_item(
            ResumeItemId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            resume_id,
            &fields,
        );
        self.items.write().unwrap().insert(item.id, item);
        self
    }

    /// Number of stored items, across all resumes
    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }
}

fn build_item(id: ResumeItemId, resume_id: ResumeId, fields: &ResumeItemFields) -> ResumeItem {
    ResumeItem {
        id,
        resume_id,
        title: fields.title.clone(),
        company: fields.company.clone(),
        start_date: fields.start_date,
        end_date: fields.end_date,
        description: fields.description.clone(),
    }
}

#[async_trait]
impl ResumeItemRepository for InMemoryResumeItemRepository {
    async fn find_by_resume(&self, resume_id: &ResumeId) -> Result<Vec<ResumeItem>, DomainError> {
        let items = self.items.read().unwrap();
        let mut found: Vec<ResumeItem> = items
            .values()
            .filter(|i| &i.resume_id == resume_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)));
        Ok(found)
    }

    async fn find_in_resume(
        &self,
        resume_id: &ResumeId,
        id: &ResumeItemId,
    ) -> Result<Option<ResumeItem>, DomainError> {
        let items = self.items.read().unwrap();
        Ok(items
            .get(id)
            .filter(|i| &i.resume_id == resume_id)
            .cloned())
    }

    async fn count_by_resumes(
        &self,
        resume_ids: &[ResumeId],
    ) -> Result<HashMap<ResumeId, u64>, DomainError> {
        let items = self.items.read().unwrap();
        let mut counts = HashMap::new();
        for item in items.values().filter(|i| resume_ids.contains(&i.resume_id)) {
            *counts.entry(item.resume_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn create(&self, new_item: &NewResumeItem) -> Result<ResumeItem, DomainError> {
        let item = build_item(
            ResumeItemId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            new_item.resume_id,
            &new_item.fields,
        );
        self.items.write().unwrap().insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: &ResumeItemId,
        fields: &ResumeItemFields,
    ) -> Result<ResumeItem, DomainError> {
        let mut items = self.items.write().unwrap();
        let item = items
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Resume item {}", id)))?;
        *item = build_item(item.id, item.resume_id, fields);
        Ok(item.clone())
    }

    async fn delete(&self, id: &ResumeItemId) -> Result<(), DomainError> {
        self.items
            .write()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Resume item {}", id)))
    }
}

// ============================================================================
// Recording Renderer
// ============================================================================

/// Renderer that emits the template name and context as JSON instead of
/// HTML, so router tests can assert on exactly what a handler rendered
#[derive(Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, RenderError> {
        Ok(serde_json::json!({ "template": template, "context": context }).to_string())
    }
}
