//! Application layer for Plinth.
//!
//! Coordinates the domain model through ports. Holds no business rules of its
//! own; it resolves generators, gathers answers, and drives the pipeline.

pub mod error;
pub mod pipeline;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GeneratorInfo, GeneratorRegistry, GeneratorService};
