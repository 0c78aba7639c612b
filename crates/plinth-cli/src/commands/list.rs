//! Implementation of the `plinth list` command.

use plinth_adapters::builtin_registry;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let registry = builtin_registry()?;
    let generators = registry.list();

    match args.format {
        ListFormat::Table => {
            output.header("Available Generators:")?;
            let width = generators
                .iter()
                .map(|g| g.name.len())
                .max()
                .unwrap_or(0);
            for generator in &generators {
                output.print(&format!(
                    "  {:width$}  {}",
                    generator.name, generator.description
                ))?;
            }
        }

        ListFormat::List => {
            for generator in &generators {
                println!("{}", generator.name);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<_> = generators
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "name": g.name,
                        "description": g.description,
                        "prompts": g.prompt_count,
                        "actions": g.action_count,
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,description,prompts,actions");
            for g in &generators {
                println!(
                    "{},{},{},{}",
                    g.name, g.description, g.prompt_count, g.action_count
                );
            }
        }
    }

    Ok(())
}
