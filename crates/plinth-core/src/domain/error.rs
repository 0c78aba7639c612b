// ============================================================================
// domain/error.rs - GENERATOR DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid generator: {0}")]
    InvalidGenerator(String),

    #[error("Generator '{generator}' declares prompt '{prompt}' more than once")]
    DuplicatePromptName { generator: String, prompt: String },

    #[error("Generator '{generator}' has no actions")]
    EmptyGenerator { generator: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("A generator named '{name}' is already registered")]
    DuplicateGenerator { name: String },

    #[error("No generator named '{name}' is registered")]
    UnknownGenerator { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidGenerator(msg) => vec![
                "Check the generator definition".into(),
                format!("Details: {}", msg),
            ],
            Self::DuplicatePromptName { generator, prompt } => vec![
                format!(
                    "Generator '{}' uses the answer key '{}' twice",
                    generator, prompt
                ),
                "Prompt names within one generator must be unique".into(),
            ],
            Self::EmptyGenerator { generator } => vec![
                format!("Generator '{}' declares no file-emission actions", generator),
                "Add at least one action to the generator definition".into(),
            ],
            Self::DuplicateGenerator { name } => vec![
                format!("'{}' was registered twice; the first registration wins", name),
                "Pick a different name for the new generator".into(),
            ],
            Self::UnknownGenerator { name } => vec![
                format!("No generator named '{}'", name),
                "Try: plinth list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidGenerator(_)
            | Self::DuplicatePromptName { .. }
            | Self::EmptyGenerator { .. }
            | Self::DuplicateGenerator { .. } => ErrorCategory::Validation,
            Self::UnknownGenerator { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
