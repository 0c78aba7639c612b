//! Command handlers.
//!
//! One module per subcommand; each exposes a single `execute` function.

pub mod completions;
pub mod config;
pub mod generate;
pub mod list;
