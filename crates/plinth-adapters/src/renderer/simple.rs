//! Simple variable substitution renderer.

use plinth_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, TemplateId},
    error::PlinthResult,
};
use tracing::instrument;

use crate::builtin_templates;

/// Renderer over the builtin template table using basic variable substitution.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: &TemplateId, context: &RenderContext) -> PlinthResult<String> {
        let source = builtin_templates::source(template).ok_or_else(|| {
            ApplicationError::RenderingFailed {
                template: template.0.to_string(),
                reason: "no builtin template with this id".into(),
            }
        })?;

        Ok(context.render(source))
    }
}
