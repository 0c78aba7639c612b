//! Unified error handling for Plinth core.
//!
//! Layered error hierarchy following the hexagonal architecture:
//!
//! - [`DomainError`](crate::domain::DomainError) — business rule violations
//! - [`ApplicationError`](crate::application::ApplicationError) — orchestration
//!   and port failures
//! - [`PlinthError`] — unified type exposed at the crate boundary

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum PlinthError {
    /// Domain layer errors (business rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Application layer errors (orchestration, ports).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PlinthError {
    /// Actionable suggestions for resolving this error, shown by the CLI.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => {
                vec!["Check your configuration file syntax".to_string()]
            }
            Self::Internal { .. } => {
                vec!["This is likely a bug; please report it".to_string()]
            }
        }
    }
}

/// Convenience result alias used throughout the core crate.
pub type PlinthResult<T> = Result<T, PlinthError>;
