//! minijinja adapter for the Renderer port
//!
//! Templates are compiled into the binary so a deployment is a single file.

use minijinja::Environment;
use serde_json::Value;

use crate::domain::ports::{RenderError, Renderer};

/// Embedded templates, keyed by the name handlers refer to them by
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    (
        "resume/resume_list.html",
        include_str!("../../../templates/resume/resume_list.html"),
    ),
    (
        "resume/resume.html",
        include_str!("../../../templates/resume/resume.html"),
    ),
    (
        "resume/resume_create.html",
        include_str!("../../../templates/resume/resume_create.html"),
    ),
    (
        "resume/resume_edit.html",
        include_str!("../../../templates/resume/resume_edit.html"),
    ),
    (
        "resume/resume_item_create.html",
        include_str!("../../../templates/resume/resume_item_create.html"),
    ),
    (
        "resume/resume_item_edit.html",
        include_str!("../../../templates/resume/resume_item_edit.html"),
    ),
    (
        "resume/_item_fields.html",
        include_str!("../../../templates/resume/_item_fields.html"),
    ),
];

/// Renders the embedded templates with HTML auto-escaping
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(*name, *source).map_err(|e| RenderError {
                template: name.to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(Self { env })
    }
}

impl Renderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String, RenderError> {
        let to_error = |e: minijinja::Error| RenderError {
            template: template.to_string(),
            message: e.to_string(),
        };

        self.env
            .get_template(template)
            .map_err(to_error)?
            .render(context)
            .map_err(to_error)
    }
}
