//! Generator domain aggregate.
//!
//! A [`GeneratorSpec`] is the central concept in Plinth: a named unit of
//! scaffolding composed of ordered, typed prompts and an ordered pipeline of
//! file-emission actions. Specs are built once at process start, validated,
//! registered, and never mutated afterwards.
//!
//! ## Aggregate Boundaries
//!
//! A `GeneratorSpec` is a consistency boundary: it exclusively owns its
//! prompts and actions (no sharing between generators).
//!
//! ## Invariants (enforced by `validate()`)
//!
//! 1. `name` is non-empty
//! 2. Prompt names within one generator are unique (answer keys must not
//!    collide)
//! 3. At least one action is declared
//!
//! Action order is significant: the pipeline evaluates actions in exactly the
//! declared order, and later actions never reorder earlier ones.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use super::error::DomainError;
use super::naming::{to_camel_case, to_pascal_case};
use super::signature::parse_signatures;

// ============================================================================
// Template Identity
// ============================================================================

/// Identifier for a render template.
///
/// Resolved by the `TemplateRenderer` port implementation (e.g. a lookup in
/// the builtin template table). Builtin templates are compile-time constants,
/// hence `&'static str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub &'static str);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Prompts and Answers
// ============================================================================

/// The type of answer a prompt collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free-form text input.
    Text,
    /// Yes/no confirmation.
    Confirm,
}

/// One answer value, matching its prompt's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Flag(bool),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

/// Declares one question presented before the action pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    /// Answer key; unique within a generator.
    pub name: String,
    pub kind: PromptKind,
    /// Question shown to the user.
    pub message: String,
    /// Applied when the answer provider yields no value.
    pub default: Option<AnswerValue>,
}

impl PromptSpec {
    /// A free-form text prompt with no default.
    pub fn text(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PromptKind::Text,
            message: message.into(),
            default: None,
        }
    }

    /// A yes/no prompt with the given default.
    pub fn confirm(name: impl Into<String>, message: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            kind: PromptKind::Confirm,
            message: message.into(),
            default: Some(AnswerValue::Flag(default)),
        }
    }

    /// Attach a default value, consuming self.
    pub fn with_default(mut self, default: AnswerValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// The per-invocation collection of prompt answers, keyed by prompt name.
///
/// Scoped to one invocation and discarded after the pipeline completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: HashMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: AnswerValue) {
        self.values.insert(key.into(), value);
    }

    /// Fluent variant of `insert` for test setup and builder chains.
    pub fn with(mut self, key: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(AnswerValue::as_text)
    }

    pub fn get_flag(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(AnswerValue::as_flag)
    }

    /// Iterate over all answers (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ============================================================================
// Actions
// ============================================================================

/// The shared payload of all file-emission actions: where to write, and which
/// template produces the content. The path is itself a template rendered
/// against the invocation's context (e.g. `src/ui/stores/{{NAME_CAMEL}}Store.ts`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAction {
    pub target_path: String,
    pub template_id: TemplateId,
}

impl AddAction {
    pub fn new(target_path: impl Into<String>, template_id: TemplateId) -> Self {
        Self {
            target_path: target_path.into(),
            template_id,
        }
    }
}

/// Predicate over an [`AnswerSet`], deciding whether a conditional action runs.
///
/// A tagged variant rather than an arbitrary callable, so each predicate is an
/// explicit, independently testable unit. A missing or wrongly-typed answer
/// makes the predicate false; it never fails the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Unconditionally true; used for actions that only need derived data.
    Always,
    /// True when the named flag answer is `true`.
    FlagIsTrue { key: String },
    /// True when the named flag answer is `false`.
    FlagIsFalse { key: String },
    /// True when the named text answer equals `value` exactly.
    TextEquals { key: String, value: String },
}

impl Predicate {
    pub fn flag_is_true(key: impl Into<String>) -> Self {
        Self::FlagIsTrue { key: key.into() }
    }

    pub fn flag_is_false(key: impl Into<String>) -> Self {
        Self::FlagIsFalse { key: key.into() }
    }

    /// Evaluate against the answers.
    pub fn holds(&self, answers: &AnswerSet) -> bool {
        match self {
            Self::Always => true,
            Self::FlagIsTrue { key } => answers.get_flag(key) == Some(true),
            Self::FlagIsFalse { key } => answers.get_flag(key) == Some(false),
            Self::TextEquals { key, value } => answers.get_text(key) == Some(value.as_str()),
        }
    }
}

/// Derivation step producing extra render-context variables from the answers.
///
/// Like [`Predicate`], a tagged variant so each deriver is explicit and
/// testable on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeriveData {
    /// Parse the named text answer as a comma-separated method-signature list
    /// and expose the result as template variables:
    ///
    /// - `METHODS` — one indented TypeScript declaration per parsed signature
    /// - `METHOD_COUNT` — number of parsed signatures
    MethodSignatures { from: String },
}

impl DeriveData {
    pub fn method_signatures(from: impl Into<String>) -> Self {
        Self::MethodSignatures { from: from.into() }
    }

    /// Compute the extra variables. Never fails: a missing answer or a fully
    /// malformed signature list derives an empty method block.
    pub fn derive(&self, answers: &AnswerSet) -> Vec<(String, String)> {
        match self {
            Self::MethodSignatures { from } => {
                let methods = parse_signatures(answers.get_text(from).unwrap_or(""));
                let block = methods
                    .iter()
                    .map(|m| format!("  {}({}): {}", m.name, m.params, m.return_type))
                    .collect::<Vec<_>>()
                    .join("\n");
                vec![
                    ("METHODS".to_string(), block),
                    ("METHOD_COUNT".to_string(), methods.len().to_string()),
                ]
            }
        }
    }
}

/// One step in a generator's action pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSpec {
    /// Always emits one file.
    StaticAdd(AddAction),
    /// Emits one file only when the predicate holds; may derive extra
    /// render-context data first. A false predicate contributes no output and
    /// is not an error.
    ConditionalAdd {
        action: AddAction,
        predicate: Predicate,
        derive: Option<DeriveData>,
    },
}

impl ActionSpec {
    /// A static file-emission step.
    pub fn add(target_path: impl Into<String>, template_id: TemplateId) -> Self {
        Self::StaticAdd(AddAction::new(target_path, template_id))
    }

    /// A conditional step with no derived data.
    pub fn conditional(
        target_path: impl Into<String>,
        template_id: TemplateId,
        predicate: Predicate,
    ) -> Self {
        Self::ConditionalAdd {
            action: AddAction::new(target_path, template_id),
            predicate,
            derive: None,
        }
    }

    /// A conditional step that derives extra context before rendering.
    pub fn conditional_with(
        target_path: impl Into<String>,
        template_id: TemplateId,
        predicate: Predicate,
        derive: DeriveData,
    ) -> Self {
        Self::ConditionalAdd {
            action: AddAction::new(target_path, template_id),
            predicate,
            derive: Some(derive),
        }
    }

    /// The (unrendered) target path template of this action.
    pub fn target_path(&self) -> &str {
        match self {
            Self::StaticAdd(a) | Self::ConditionalAdd { action: a, .. } => &a.target_path,
        }
    }
}

// ============================================================================
// Generator Aggregate
// ============================================================================

/// A named, registered unit of scaffolding: prompts plus an action pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSpec {
    /// Unique registry key (e.g. "entity").
    pub name: String,
    /// Human-readable description for `plinth list`.
    pub description: String,
    /// Questions presented in declared order before any action runs.
    pub prompts: Vec<PromptSpec>,
    /// File-emission steps, evaluated in exactly this order.
    pub actions: Vec<ActionSpec>,
}

impl GeneratorSpec {
    /// Start the builder pattern for fluent construction.
    pub fn builder() -> GeneratorSpecBuilder {
        GeneratorSpecBuilder::default()
    }

    /// Validate all invariants. Called by the registry before registration.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidGenerator(
                "Generator name cannot be empty".into(),
            ));
        }

        if self.actions.is_empty() {
            return Err(DomainError::EmptyGenerator {
                generator: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for prompt in &self.prompts {
            if !seen.insert(prompt.name.as_str()) {
                return Err(DomainError::DuplicatePromptName {
                    generator: self.name.clone(),
                    prompt: prompt.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for constructing generator specs with validation.
///
/// All fields are optional during construction, but `build()` enforces the
/// aggregate invariants via `GeneratorSpec::validate`.
#[derive(Default)]
pub struct GeneratorSpecBuilder {
    name: Option<String>,
    description: Option<String>,
    prompts: Vec<PromptSpec>,
    actions: Vec<ActionSpec>,
}

impl GeneratorSpecBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a prompt (accumulates, order preserved).
    pub fn prompt(mut self, prompt: PromptSpec) -> Self {
        self.prompts.push(prompt);
        self
    }

    /// Add an action (accumulates, order preserved).
    pub fn action(mut self, action: ActionSpec) -> Self {
        self.actions.push(action);
        self
    }

    /// Consume builder and construct a validated `GeneratorSpec`.
    pub fn build(self) -> Result<GeneratorSpec, DomainError> {
        let spec = GeneratorSpec {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            prompts: self.prompts,
            actions: self.actions,
        };
        spec.validate()?;
        Ok(spec)
    }
}

// ============================================================================
// Pipeline output
// ============================================================================

/// One file produced by the action pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    /// Final path (output root joined with the rendered target path).
    pub path: PathBuf,
    pub content: String,
}

// ============================================================================
// Render Context
// ============================================================================

/// Context for template rendering.
///
/// A value object containing the variable map handed to the renderer port and
/// used to render action target paths. Variables use `{{VARIABLE}}` syntax
/// with SCREAMING_SNAKE_CASE names.
///
/// ## Derived variables
///
/// [`RenderContext::from_answers`] derives casing variants once per
/// invocation. For a text answer `name = "user profile"`:
///
/// | Variable | Value |
/// |----------|-------|
/// | `NAME` | "user profile" |
/// | `NAME_PASCAL` | "UserProfile" |
/// | `NAME_CAMEL` | "userProfile" |
///
/// Flag answers contribute a single `"true"`/`"false"` variable.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the base context for one invocation from its answers.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let mut ctx = Self::new();
        for (key, value) in answers.iter() {
            let var = key.to_uppercase();
            match value {
                AnswerValue::Text(text) => {
                    ctx.insert(format!("{var}_PASCAL"), to_pascal_case(text));
                    ctx.insert(format!("{var}_CAMEL"), to_camel_case(text));
                    ctx.insert(var, text.clone());
                }
                AnswerValue::Flag(flag) => {
                    ctx.insert(var, flag.to_string());
                }
            }
        }
        ctx
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Simple linear scan and replace — adequate for generated-file sizes.
    /// `{{UNKNOWN}}` placeholders remain as literal text (no error).
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        // Single-pass replacement. Order doesn't matter for independent variables.
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
