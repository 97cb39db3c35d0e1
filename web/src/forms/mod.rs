//! Form validation
//!
//! A form is the raw, string-typed shape of a POST body. `Form::clean` turns
//! it into validated domain fields or a set of per-field error messages that
//! can be shown next to the inputs.

pub mod resume;

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

pub use resume::{ResumeForm, ResumeItemForm};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_DATE_MESSAGE: &str = "Enter a valid date.";

/// Validation interface: struct in, cleaned struct or errors out
pub trait Form {
    type Cleaned;

    fn clean(&self) -> Result<Self::Cleaned, FormErrors>;
}

/// Field name to error messages, in field-name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Merge rule violations reported by `validator`
    pub fn extend(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            for error in field_errors.iter() {
                self.add(&field, describe(error));
            }
        }
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::default();
        form_errors.extend(&errors);
        form_errors
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    if error.code == "length" {
        let max = error.params.get("max").and_then(|v| v.as_u64());
        let actual = error
            .params
            .get("value")
            .and_then(|v| v.as_str())
            .map(|s| s.chars().count());
        if let (Some(max), Some(actual)) = (max, actual) {
            return format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, actual
            );
        }
    }

    format!("Invalid value ({})", error.code)
}

/// `validator` rule for required text fields
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(REQUIRED_MESSAGE.into());
        return Err(error);
    }
    Ok(())
}
