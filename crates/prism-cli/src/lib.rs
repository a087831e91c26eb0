//! Prism command line
//!
//! Argument definitions and dispatch for the `prism` binary.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod commands;
pub mod config;

use anyhow::Context;
use chrono::Utc;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use config::PrismConfig;
use prism_engine::VariationEngine;
use prism_experiment::{export_file_name, ExportFormat};
use prism_model::TargetFormat;
use std::path::{Path, PathBuf};

/// Build the argument parser
#[must_use]
pub fn cli() -> Command {
    Command::new("prism")
        .version(prism_engine::VERSION)
        .about("Combinatorial prompt variation for image-generation models")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .subcommand(
            Command::new("linearize")
                .about("Render a structured description as a prompt")
                .arg(
                    Arg::new("description")
                        .long("description")
                        .required(true)
                        .help("JSON description file, or - for stdin"),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .default_value("generic")
                        .value_parser(value_parser!(TargetFormat))
                        .help("generic, midjourney, stable-diffusion or dalle"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Print the full analysis with every model rendering"),
                ),
        )
        .subcommand(
            Command::new("vary")
                .about("Generate prompt variations from a request body")
                .arg(
                    Arg::new("request")
                        .long("request")
                        .required(true)
                        .help("JSON request file, or - for stdin"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_parser(value_parser!(usize))
                        .help("Override the requested variant count"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export an experiment snapshot")
                .arg(
                    Arg::new("experiment")
                        .long("experiment")
                        .required(true)
                        .help("JSON snapshot file, or - for stdin"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .value_parser(value_parser!(ExportFormat))
                        .help("json or csv"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Output file, or directory for a generated file name"),
                ),
        )
        .subcommand(Command::new("presets").about("List axes, presets and defaults"))
}

/// Config path passed on the command line, if any
#[must_use]
pub fn config_path(matches: &ArgMatches) -> Option<&Path> {
    matches.get_one::<PathBuf>("config").map(PathBuf::as_path)
}

/// Run a parsed command, returning the text for stdout
///
/// # Errors
/// Any input, engine or I/O failure.
pub fn run(matches: &ArgMatches, config: &PrismConfig) -> anyhow::Result<String> {
    match matches.subcommand() {
        Some(("linearize", args)) => {
            let input = commands::read_input(required(args, "description")?)?;
            let desc = commands::parse_description(&input)?;
            let target = args
                .get_one::<TargetFormat>("target")
                .copied()
                .unwrap_or_default();
            commands::linearize_command(&desc, target, args.get_flag("all"))
        }
        Some(("vary", args)) => {
            let input = commands::read_input(required(args, "request")?)?;
            let request = commands::parse_request(&input, args.get_one::<usize>("count").copied())?;
            let mut engine_config = config.engine.clone();
            if let Some(seed) = args.get_one::<u64>("seed") {
                engine_config = engine_config.with_seed(*seed);
            }
            let engine = VariationEngine::new(engine_config);
            commands::vary_command(&engine, &request)
        }
        Some(("export", args)) => {
            let input = commands::read_input(required(args, "experiment")?)?;
            let snapshot = commands::parse_snapshot(&input)?;
            let format = args
                .get_one::<ExportFormat>("format")
                .copied()
                .unwrap_or(ExportFormat::Json);
            let content = commands::export_command(&snapshot, format)?;

            let Some(output) = args.get_one::<PathBuf>("output") else {
                return Ok(content);
            };
            let path = if output.is_dir() {
                output.join(export_file_name(&snapshot, format, Utc::now()))
            } else {
                output.clone()
            };
            std::fs::write(&path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), format = %format, "Exported experiment");
            Ok(path.display().to_string())
        }
        Some(("presets", _)) => Ok(commands::presets_command()),
        _ => anyhow::bail!("unknown command"),
    }
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing --{name}"))
}
