//! The CLI's [`AnswerProvider`] implementation.
//!
//! Resolution order per prompt:
//!
//! 1. A matching `--set key=value` assignment (or the positional NAME, which
//!    is shorthand for `--set name=...`)
//! 2. Interactive terminal prompt, unless `--defaults` was passed or stdin is
//!    not a terminal
//! 3. Nothing — the core service then falls back to the prompt's declared
//!    default, or reports a missing answer

use std::collections::HashMap;
use std::io::IsTerminal;

use tracing::debug;

use plinth_core::application::ApplicationError;
use plinth_core::application::ports::AnswerProvider;
use plinth_core::domain::{AnswerValue, PromptKind, PromptSpec};
use plinth_core::error::{PlinthError, PlinthResult};

use crate::cli::GenArgs;
use crate::error::{CliError, CliResult};

/// Answers assembled from CLI flags, with an optional interactive fallback.
pub struct CliAnswers {
    values: HashMap<String, String>,
    interactive: bool,
}

impl CliAnswers {
    /// Build from `plinth gen` arguments.
    ///
    /// Fails on malformed `--set` assignments; value coercion happens later,
    /// per prompt, when the answer's expected type is known.
    pub fn from_args(args: &GenArgs) -> CliResult<Self> {
        let mut values = HashMap::new();

        for assignment in &args.set {
            let (key, value) =
                assignment
                    .split_once('=')
                    .ok_or_else(|| CliError::InvalidAssignment {
                        assignment: assignment.clone(),
                    })?;
            values.insert(key.trim().to_string(), value.to_string());
        }

        // Positional NAME is shorthand; an explicit --set name= wins.
        if let Some(name) = &args.name {
            values.entry("name".to_string()).or_insert_with(|| name.clone());
        }

        let interactive = !args.defaults && std::io::stdin().is_terminal();
        debug!(assignments = values.len(), interactive, "Prepared answers");

        Ok(Self {
            values,
            interactive,
        })
    }
}

impl AnswerProvider for CliAnswers {
    fn provide(&self, prompt: &PromptSpec) -> PlinthResult<Option<AnswerValue>> {
        if let Some(raw) = self.values.get(&prompt.name) {
            let value = match prompt.kind {
                PromptKind::Text => AnswerValue::Text(raw.clone()),
                PromptKind::Confirm => {
                    AnswerValue::Flag(parse_flag(raw).ok_or_else(|| {
                        ApplicationError::InvalidAnswer {
                            prompt: prompt.name.clone(),
                            reason: format!("'{raw}' is not a boolean"),
                        }
                    })?)
                }
            };
            return Ok(Some(value));
        }

        if self.interactive {
            return ask(prompt);
        }

        Ok(None)
    }
}

/// Accepted boolean spellings for confirm prompts.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(feature = "interactive")]
fn ask(prompt: &PromptSpec) -> PlinthResult<Option<AnswerValue>> {
    use dialoguer::{Confirm, Input};

    let to_internal = |e: dialoguer::Error| PlinthError::Internal {
        message: format!("Prompt failed: {e}"),
    };

    match prompt.kind {
        PromptKind::Text => {
            let mut input = Input::<String>::new().with_prompt(prompt.message.clone());
            if let Some(AnswerValue::Text(default)) = &prompt.default {
                input = input.default(default.clone());
            }
            let text = input.interact_text().map_err(to_internal)?;
            Ok(Some(AnswerValue::Text(text)))
        }
        PromptKind::Confirm => {
            let default = matches!(prompt.default, Some(AnswerValue::Flag(true)));
            let flag = Confirm::new()
                .with_prompt(prompt.message.clone())
                .default(default)
                .interact()
                .map_err(to_internal)?;
            Ok(Some(AnswerValue::Flag(flag)))
        }
    }
}

#[cfg(not(feature = "interactive"))]
fn ask(_prompt: &PromptSpec) -> PlinthResult<Option<AnswerValue>> {
    // Without the interactive feature, unanswered prompts fall back to their
    // declared defaults.
    Ok(None)
}
