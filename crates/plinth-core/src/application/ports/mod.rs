//! Port definitions (trait interfaces) for the application layer.
//!
//! Ports are the seams of the hexagon. The application layer depends only on
//! these traits; `plinth-adapters` and `plinth-cli` supply the
//! implementations.

use std::path::Path;

use crate::domain::{AnswerValue, PromptSpec, RenderContext, TemplateId};
use crate::error::PlinthResult;

/// Driven port: resolve a template id and render it against a context.
pub trait TemplateRenderer: Send + Sync {
    /// Render the template's content with all `{{VARIABLE}}` placeholders
    /// substituted from the context.
    fn render(&self, template: &TemplateId, context: &RenderContext) -> PlinthResult<String>;
}

/// Driven port: the filesystem operations the pipeline needs.
///
/// Kept deliberately narrow so tests can run against an in-memory
/// implementation.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> PlinthResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> PlinthResult<()>;

    /// Whether a path already exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Driving-side collaborator: supplies answers for a generator's prompts.
///
/// Returning `Ok(None)` means "no answer given"; the service then falls back
/// to the prompt's declared default. Implementations include the interactive
/// terminal prompter and the `--set` flag parser in the CLI.
pub trait AnswerProvider {
    fn provide(&self, prompt: &PromptSpec) -> PlinthResult<Option<AnswerValue>>;
}
