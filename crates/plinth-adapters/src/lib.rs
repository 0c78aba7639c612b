//! Infrastructure adapters for Plinth.
//!
//! Implements the driven ports defined in `plinth-core` and carries the
//! builtin content:
//!
//! - [`renderer`] — the variable-substitution template renderer
//! - [`filesystem`] — local disk and in-memory filesystems
//! - [`builtin_templates`] — content for everything the builtin generators emit
//! - [`builtin_generators`] — the seven builtin generator specs

pub mod builtin_generators;
pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

pub use builtin_generators::{builtin_generators, builtin_registry};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
