//! Unified error types for the resume web service
//!
//! This module defines error types for each layer:
//! - `DomainError`: persistence and core logic errors raised behind the ports
//! - `AppError`: request-level errors (wraps domain errors for HTTP responses)
//!
//! Two lookup failures are deliberately kept apart. An unscoped resume lookup
//! that misses is `AppError::ResumeDoesNotExist` and surfaces as a server
//! error, while a resume item lookup scoped to its parent that misses is
//! `AppError::NotFound` and surfaces as a handled 404.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::entities::ResumeId;
use crate::domain::ports::RenderError;
use crate::forms::FormErrors;

/// Domain layer errors - raised by repository adapters
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Resume lookup by id found nothing. Not converted into a 404.
    #[error("Resume matching query does not exist: {0}")]
    ResumeDoesNotExist(ResumeId),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Resume creation aborts instead of re-rendering the form.
    #[error("Form not valid! {0}")]
    InvalidResumeForm(FormErrors),

    #[error("Template error: {0}")]
    Render(String),
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e.to_string())
    }
}

const SERVER_ERROR_PAGE: &str = "<!doctype html>\n<title>Server Error (500)</title>\n<h1>Server Error (500)</h1>\n";

fn not_found_page(detail: &str) -> String {
    format!(
        "<!doctype html>\n<title>Not Found</title>\n<h1>Not Found</h1>\n<p>{}</p>\n",
        escape_html(detail)
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Domain(DomainError::NotFound(msg)) | AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Html(not_found_page(msg))).into_response()
            }
            AppError::ResumeDoesNotExist(id) => {
                tracing::error!(resume_id = %id, "Resume matching query does not exist");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
            AppError::InvalidResumeForm(errors) => {
                tracing::error!(errors = %errors, "Form not valid!");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
            AppError::Render(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
            }
        }
    }
}
