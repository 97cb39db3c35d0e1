//! Resume and resume item forms

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{not_blank, Form, FormErrors, INVALID_DATE_MESSAGE, REQUIRED_MESSAGE};
use crate::domain::entities::{Resume, ResumeItem, ResumeItemFields};

/// Accepted date input formats, tried in order. Two-digit years come before
/// four-digit ones because `%Y` would happily read "22" as the year 22.
const DATE_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Form to add or rename a resume.
///
/// The owner is not a form field: it is always the requesting user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ResumeForm {
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub title: String,
}

impl ResumeForm {
    /// Form bound to an existing resume
    pub fn from_resume(resume: &Resume) -> Self {
        Self {
            title: resume.title.clone(),
        }
    }
}

impl Form for ResumeForm {
    type Cleaned = String;

    fn clean(&self) -> Result<String, FormErrors> {
        let trimmed = ResumeForm {
            title: self.title.trim().to_string(),
        };
        trimmed.validate()?;
        Ok(trimmed.title)
    }
}

/// Form for creating and editing resume items.
///
/// The parent resume is not a form field: it is always taken from the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ResumeItemForm {
    #[validate(custom(function = "not_blank"), length(max = 127))]
    pub title: String,

    #[validate(custom(function = "not_blank"), length(max = 127))]
    pub company: String,

    pub start_date: String,

    pub end_date: String,

    #[validate(length(max = 2047))]
    pub description: String,
}

impl ResumeItemForm {
    /// Form bound to an existing item
    pub fn from_item(item: &ResumeItem) -> Self {
        Self {
            title: item.title.clone(),
            company: item.company.clone(),
            start_date: item.start_date.format("%Y-%m-%d").to_string(),
            end_date: item
                .end_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            description: item.description.clone(),
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

impl Form for ResumeItemForm {
    type Cleaned = ResumeItemFields;

    fn clean(&self) -> Result<ResumeItemFields, FormErrors> {
        let form = self.trimmed();
        let mut errors = FormErrors::default();

        if let Err(e) = form.validate() {
            errors.extend(&e);
        }

        let start_date = if form.start_date.is_empty() {
            errors.add("start_date", REQUIRED_MESSAGE);
            None
        } else {
            let parsed = parse_date(&form.start_date);
            if parsed.is_none() {
                errors.add("start_date", INVALID_DATE_MESSAGE);
            }
            parsed
        };

        // Blank end date means the position is currently held
        let end_date = if form.end_date.is_empty() {
            None
        } else {
            let parsed = parse_date(&form.end_date);
            if parsed.is_none() {
                errors.add("end_date", INVALID_DATE_MESSAGE);
            }
            parsed
        };

        match start_date {
            Some(start_date) if errors.is_empty() => Ok(ResumeItemFields {
                title: form.title,
                company: form.company,
                start_date,
                end_date,
                description: form.description,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
