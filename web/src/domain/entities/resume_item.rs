//! Resume item domain entity
//!
//! One job-history entry: role, employer, date range and description.

use chrono::NaiveDate;
use serde::Serialize;

use super::resume::{Resume, ResumeId};

/// Unique identifier for a resume item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResumeItemId(pub i64);

impl From<i64> for ResumeItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ResumeItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position held over a period of time, belonging to exactly one resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeItem {
    pub id: ResumeItemId,
    pub resume_id: ResumeId,
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    /// `None` means the position is currently held
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl ResumeItem {
    /// Whether this is the caller's current position
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// Text representation, e.g. `Career: Engineer at Acme (2020-01-01)`.
    ///
    /// The parent is passed in because items don't carry their resume title.
    pub fn label(&self, resume: &Resume) -> String {
        format!(
            "{}: {} at {} ({})",
            resume.title,
            self.title,
            self.company,
            self.start_date.format("%Y-%m-%d")
        )
    }

    /// Edit page path
    pub fn edit_url(&self) -> String {
        format!("/resumes/{}/items/{}/edit/", self.resume_id, self.id)
    }
}

/// Validated, user-editable fields of a resume item.
///
/// The parent resume is deliberately absent: it is always set server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeItemFields {
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

/// Data needed to create a new resume item
#[derive(Debug, Clone)]
pub struct NewResumeItem {
    pub resume_id: ResumeId,
    pub fields: ResumeItemFields,
}
