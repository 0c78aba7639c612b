//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "plinth",
    bin_name = "plinth",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Prompt-driven code generation",
    long_about = "Plinth scaffolds the layers of a hexagonal TypeScript \
                  application from named generators: entities, use cases, \
                  ports, adapters, stores, and components.",
    after_help = "EXAMPLES:\n\
        \x20 plinth gen entity --set name=user --set with_dto=true\n\
        \x20 plinth gen usecase RegisterUser --out ./app\n\
        \x20 plinth list --format json\n\
        \x20 plinth completions bash > /usr/share/bash-completion/completions/plinth",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a generator.
    #[command(
        visible_alias = "g",
        about = "Run a generator",
        after_help = "EXAMPLES:\n\
            \x20 plinth gen entity user --set with_dto=true\n\
            \x20 plinth gen adapter --set \"name=user repository\" \\\n\
            \x20     --set \"methods=saveUser(user: User): Promise<void>\"\n\
            \x20 plinth gen component UserForm --dry-run"
    )]
    Gen(GenArgs),

    /// List available generators.
    #[command(
        visible_alias = "ls",
        about = "List available generators",
        after_help = "EXAMPLES:\n\
            \x20 plinth list\n\
            \x20 plinth list --format json\n\
            \x20 plinth list --format csv"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 plinth completions bash > ~/.local/share/bash-completion/completions/plinth\n\
            \x20 plinth completions zsh  > ~/.zfunc/_plinth\n\
            \x20 plinth completions fish > ~/.config/fish/completions/plinth.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Plinth configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 plinth config get defaults.out_dir\n\
            \x20 plinth config set defaults.out_dir ./app\n\
            \x20 plinth config list"
    )]
    Config(ConfigCommands),
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// Arguments for `plinth gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Name of the generator to run (see `plinth list`).
    #[arg(value_name = "GENERATOR", help = "Generator to run")]
    pub generator: String,

    /// Shorthand for `--set name=<NAME>`.
    #[arg(value_name = "NAME", help = "Answer to the generator's name prompt")]
    pub name: Option<String>,

    /// Answer a prompt non-interactively.  Repeatable.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        help = "Answer a prompt (repeatable, e.g. --set with_dto=true)"
    )]
    pub set: Vec<String>,

    /// Never prompt; unanswered prompts use their declared default.
    #[arg(
        short = 'y',
        long = "defaults",
        help = "Use prompt defaults instead of asking"
    )]
    pub defaults: bool,

    /// Root directory files are generated under.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub out: Option<PathBuf>,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `plinth list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `plinth completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `plinth config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.out_dir`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
