//! Domain layer for Plinth.
//!
//! Pure business logic with no knowledge of the filesystem, terminals, or any
//! other infrastructure concern. Everything here is deterministic and
//! synchronous, which keeps the layer trivially testable.
//!
//! - [`generator`] — the `GeneratorSpec` aggregate, prompts, answers, actions,
//!   and the render context
//! - [`signature`] — the method-signature micro-parser
//! - [`naming`] — case transforms used when deriving context variables
//! - [`error`] — domain error types

pub mod error;
pub mod generator;
pub mod naming;
pub mod signature;

pub use error::{DomainError, ErrorCategory};
pub use generator::{
    ActionSpec, AddAction, AnswerSet, AnswerValue, DeriveData, EmittedFile, GeneratorSpec,
    GeneratorSpecBuilder, Predicate, PromptKind, PromptSpec, RenderContext, TemplateId,
};
pub use naming::{to_camel_case, to_pascal_case};
pub use signature::{MethodDescriptor, parse_signatures};
