//! Application layer error types.
//!
//! Orchestration and port failures. Domain rule violations live in
//! [`crate::domain::DomainError`]; this type covers what can go wrong while
//! running a generator against the outside world.

use thiserror::Error;

/// Errors that occur in the application layer.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The renderer port failed to produce content for a template.
    #[error("Failed to render template '{template}': {reason}")]
    RenderingFailed { template: String, reason: String },

    /// The filesystem port failed.
    #[error("Filesystem operation failed at '{path}': {reason}")]
    FilesystemError { path: String, reason: String },

    /// A required prompt got no answer and declared no default.
    #[error("Generator '{generator}' is missing an answer for prompt '{prompt}'")]
    MissingAnswer { generator: String, prompt: String },

    /// An answer does not match its prompt's kind.
    #[error("Invalid answer for prompt '{prompt}': {reason}")]
    InvalidAnswer { prompt: String, reason: String },

    /// An action in the pipeline failed; actions after it did not run.
    #[error("Generator '{generator}' failed at action {index} ('{path}'): {reason}")]
    ActionFailed {
        generator: String,
        index: usize,
        path: String,
        reason: String,
    },
}

impl ApplicationError {
    /// Actionable suggestions for resolving this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { .. } => vec![
                "This may indicate a broken builtin template".to_string(),
                "Run with -v for the full rendering context".to_string(),
            ],
            Self::FilesystemError { .. } => vec![
                "Check that the output directory is writable".to_string(),
                "Check available disk space".to_string(),
            ],
            Self::MissingAnswer { prompt, .. } => vec![
                format!("Pass --set {prompt}=<value> to supply the answer"),
                "Run without --defaults to be prompted interactively".to_string(),
            ],
            Self::InvalidAnswer { .. } => vec![
                "Confirm prompts accept true/false, yes/no, y/n".to_string(),
            ],
            Self::ActionFailed { .. } => vec![
                "Files emitted by earlier actions were kept".to_string(),
                "Fix the cause and re-run; existing files are overwritten".to_string(),
            ],
        }
    }
}
