//! Plinth Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Plinth
//! code-generation tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           plinth-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GeneratorService, GeneratorRegistry) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Renderer, Filesystem, AnswerProvider) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     plinth-adapters (Infrastructure)    │
//! │  (SimpleRenderer, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (GeneratorSpec, signature parser, naming)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plinth_core::{
//!     application::{GeneratorRegistry, GeneratorService},
//!     domain::{ActionSpec, GeneratorSpec, PromptSpec, TemplateId},
//! };
//!
//! // 1. Populate the registry once at startup
//! let mut registry = GeneratorRegistry::new();
//! registry.register(
//!     GeneratorSpec::builder()
//!         .name("usecase")
//!         .description("Create new use case")
//!         .prompt(PromptSpec::text("name", "Use case name:"))
//!         .action(ActionSpec::add(
//!             "src/application/usecases/{{NAME_PASCAL}}UseCase.ts",
//!             TemplateId("usecase"),
//!         ))
//!         .build()
//!         .unwrap(),
//! ).unwrap();
//!
//! // 2. Use the service (with injected adapters)
//! let service = GeneratorService::new(registry, renderer, filesystem);
//! let emitted = service.invoke("usecase", &answers, "./out".as_ref()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorInfo, GeneratorRegistry, GeneratorService,
        ports::{AnswerProvider, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        ActionSpec, AddAction, AnswerSet, AnswerValue, DeriveData, EmittedFile, GeneratorSpec,
        MethodDescriptor, Predicate, PromptKind, PromptSpec, RenderContext, TemplateId,
        parse_signatures,
    };
    pub use crate::error::{PlinthError, PlinthResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
