//! Resume domain entity
//!
//! A named collection of job-history entries owned by one user.

use serde::Serialize;

use super::user::UserId;

/// Unique identifier for a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResumeId(pub i64);

impl From<i64> for ResumeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ResumeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resume {
    pub id: ResumeId,
    pub owner: UserId,
    pub title: String,
}

impl Resume {
    /// Whether `user` created this resume
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    /// Detail page path
    pub fn url(&self) -> String {
        format!("/resumes/{}/", self.id)
    }
}

impl std::fmt::Display for Resume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Data needed to create a new resume
#[derive(Debug, Clone)]
pub struct NewResume {
    pub owner: UserId,
    pub title: String,
}

/// A resume annotated with the number of items it holds, as shown in the
/// resume list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeSummary {
    pub resume: Resume,
    pub num_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_resume() -> Resume {
        Resume {
            id: ResumeId(1),
            owner: UserId::from("alice"),
            title: "Career".to_string(),
        }
    }

    #[test]
    fn resume_displays_as_title() {
        assert_eq!(make_resume().to_string(), "Career");
    }

    #[test]
    fn resume_url() {
        assert_eq!(make_resume().url(), "/resumes/1/");
    }

    #[test]
    fn resume_ownership() {
        let resume = make_resume();
        assert!(resume.is_owned_by(&UserId::from("alice")));
        assert!(!resume.is_owned_by(&UserId::from("mallory")));
    }

    #[test]
    fn resume_id_display() {
        assert_eq!(ResumeId(12).to_string(), "12");
    }
}
