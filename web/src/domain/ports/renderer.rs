//! Template rendering port
//!
//! Handlers describe a page as a template name plus a context value and
//! leave turning that into markup to an adapter.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to render {template}: {message}")]
pub struct RenderError {
    pub template: String,
    pub message: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send + Sync {
    /// Render `template` with `context` into a response body
    fn render(&self, template: &str, context: &Value) -> Result<String, RenderError>;
}
