//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{Resume, ResumeId, ResumeItemFields, UserId};

/// Create a test resume with the given id, owner and title
pub fn test_resume(id: i64, owner: &str, title: &str) -> Resume {
    Resume {
        id: ResumeId(id),
        owner: UserId::from(owner),
        title: title.to_string(),
    }
}

/// Fields for a current position at Acme starting 2020-01-01
pub fn test_item_fields(title: &str) -> ResumeItemFields {
    ResumeItemFields {
        title: title.to_string(),
        company: "Acme".to_string(),
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        end_date: None,
        description: String::new(),
    }
}
