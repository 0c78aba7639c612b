//! Implementation of the `plinth gen` command.
//!
//! Responsibility: translate CLI arguments into answers, call the core
//! generator service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use plinth_adapters::{LocalFilesystem, SimpleRenderer, builtin_registry};
use plinth_core::application::GeneratorService;

use crate::{
    answers::CliAnswers,
    cli::{GenArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(generator = %args.generator))]
pub fn execute(
    args: GenArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let output_root = resolve_output_root(&args, &config);
    debug!(out = %output_root.display(), dry_run = args.dry_run, "Resolved output root");

    let service = GeneratorService::new(
        builtin_registry()?,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let provider = CliAnswers::from_args(&args)?;

    let emitted = if args.dry_run {
        service.preview(&args.generator, &provider, &output_root)?
    } else {
        service.invoke(&args.generator, &provider, &output_root)?
    };

    if output.format() == OutputFormat::Json {
        // Machine-readable summary to stdout; must stay parseable, so it
        // bypasses the quiet/colour handling in OutputManager.
        let files: Vec<String> = emitted.iter().map(|f| f.path.display().to_string()).collect();
        let summary = serde_json::json!({
            "generator": args.generator,
            "dry_run": args.dry_run,
            "files": files,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".into())
        );
    } else {
        if args.dry_run {
            output.header("Dry run - no files written:")?;
            for file in &emitted {
                output.print(&format!("  {}", file.path.display()))?;
            }
        } else {
            for file in &emitted {
                output.success(&file.path.display().to_string())?;
            }
        }

        let noun = if emitted.len() == 1 { "file" } else { "files" };
        output.info(&format!(
            "{} emitted {} {}",
            args.generator,
            emitted.len(),
            noun
        ))?;
    }

    info!(files = emitted.len(), "Generation complete");
    Ok(())
}

/// `--out` wins, then the configured default, then the current directory.
fn resolve_output_root(args: &GenArgs, config: &AppConfig) -> PathBuf {
    args.out
        .clone()
        .or_else(|| config.defaults.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}
