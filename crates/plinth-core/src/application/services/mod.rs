//! Application services: use case orchestration over the ports.

pub mod generator_service;
pub mod registry;

pub use generator_service::GeneratorService;
pub use registry::{GeneratorInfo, GeneratorRegistry};
