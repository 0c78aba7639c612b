//! Comprehensive error handling for the Plinth CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use plinth_core::application::ApplicationError;
use plinth_core::domain::ErrorCategory as CoreCategory;
use plinth_core::error::PlinthError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--set` argument was not of the form `key=value`.
    #[error("Invalid --set argument '{assignment}': expected key=value")]
    InvalidAssignment { assignment: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `plinth-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] PlinthError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAssignment { assignment } => vec![
                format!("'{}' must look like key=value", assignment),
                "Example: --set name=user --set with_dto=true".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/plinth/config.toml".into(),
                "Use 'plinth config path' to locate the active config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAssignment { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core {
                PlinthError::Domain(e) => match e.category() {
                    CoreCategory::Validation => ErrorCategory::UserError,
                    CoreCategory::NotFound => ErrorCategory::NotFound,
                    CoreCategory::Internal => ErrorCategory::Internal,
                },
                PlinthError::Application(e) => match e {
                    ApplicationError::MissingAnswer { .. }
                    | ApplicationError::InvalidAnswer { .. } => ErrorCategory::UserError,
                    _ => ErrorCategory::Internal,
                },
                PlinthError::Configuration { .. } => ErrorCategory::Configuration,
                PlinthError::Internal { .. } => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_core::domain::DomainError;

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn unknown_generator_exits_3() {
        let err = CliError::Core(
            DomainError::UnknownGenerator {
                name: "nope".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn bad_assignment_exits_2() {
        let err = CliError::InvalidAssignment {
            assignment: "oops".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_answer_is_a_user_error() {
        let err = CliError::Core(
            ApplicationError::MissingAnswer {
                generator: "entity".into(),
                prompt: "name".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn io_error_exits_1() {
        let err = CliError::from(std::io::Error::other("disk on fire"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_error_exits_4() {
        let err = CliError::ConfigError {
            message: "bad toml".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn plain_format_includes_suggestions() {
        let err = CliError::Core(
            DomainError::UnknownGenerator {
                name: "nope".into(),
            }
            .into(),
        );
        let out = err.format_plain(false);
        assert!(out.contains("Error:"));
        assert!(out.contains("Suggestions:"));
        assert!(out.contains("plinth list"));
    }

    #[test]
    fn unknown_generator_suggestions_mention_list() {
        let err = CliError::Core(
            DomainError::UnknownGenerator {
                name: "nope".into(),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("plinth list")));
    }
}
