//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};
use crate::output::OutputFormat;

/// Initialize the logging subsystem based on CLI flags.
///
/// Logs go to stderr. Warnings are suppressed when machine-readable output
/// (JSON/JSONL) is requested, unless `--verbose` was given.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let machine_output = command_format(cli)
        .is_some_and(|format| matches!(format, OutputFormat::Json | OutputFormat::Jsonl));

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || machine_output {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: disable when requested, NO_COLOR is set, or when emitting machine output
    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || machine_output {
        color_control::set_override(false);
    }
    Ok(())
}

fn command_format(cli: &Cli) -> Option<OutputFormat> {
    match &cli.command {
        Some(
            Commands::Split { format, .. }
            | Commands::Records { format, .. }
            | Commands::Resume { format, .. }
            | Commands::Web3 { format, .. }
            | Commands::Gallery { format, .. }
            | Commands::Route { format, .. },
        ) => Some(format.resolve()),
        Some(Commands::Config { .. }) | None => None,
    }
}
