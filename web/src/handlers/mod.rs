//! HTTP handlers
//!
//! Axum request handlers for the resume pages. Each page is a GET handler
//! that renders a form and a POST handler that validates it, then either
//! redirects or renders the page again.

pub mod resume_items;
pub mod resumes;

pub use resume_items::{create_item, edit_item_form, new_item_form, submit_item_edit};
pub use resumes::{
    create_resume, edit_resume_form, list_resumes, new_resume_form, rename_resume, view_resume,
};

use axum::response::Html;
use serde_json::Value;

use crate::error::AppError;
use crate::AppState;

/// Render `template` with `context` into an HTML response
fn render(state: &AppState, template: &str, context: Value) -> Result<Html<String>, AppError> {
    let html = state.renderer.render(template, &context)?;
    Ok(Html(html))
}
