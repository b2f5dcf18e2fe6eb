//! folio CLI - parse and preview portfolio content
//!
//! Wires the clap definition in [`cli`] to the command implementations,
//! after configuring logging and loading configuration.
use anyhow::Result;
use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::commands::Source;
use crate::utils::initialize_logging;

/// Execute the folio CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the configuration is
/// invalid, or the command fails.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;
    execute_command(cli).await
}

async fn execute_command(cli: Cli) -> Result<()> {
    let config_arg = cli.config.as_deref();
    let Some(command) = cli.command.clone() else {
        // No subcommand provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::Config { command } = &command {
        return commands::manage_config(command, config_arg);
    }

    let config = commands::config::load(config_arg)?;
    let site = &config.site;

    match command {
        Commands::Split {
            input,
            marker,
            inclusive,
            format,
        } => {
            let source = Source::from_input(&input, &site.resume_path);
            commands::split_document(
                &source,
                marker.as_deref(),
                inclusive,
                &config,
                format.resolve(),
            )
            .await?;
        },
        Commands::Records {
            input,
            parse,
            expand,
            format,
        } => {
            let source = Source::from_input(&input, &site.resume_path);
            commands::show_records(&source, &parse, &expand, &config, format.resolve()).await?;
        },
        Commands::Resume {
            input,
            viewport,
            user_agent,
            contributions,
            expand,
            format,
        } => {
            let source = Source::from_input(&input, &site.resume_path);
            let viewport =
                commands::select_viewport(viewport.map(Into::into), user_agent.as_deref());
            commands::show_resume(
                &source,
                viewport,
                contributions.map(Into::into),
                &expand,
                &config,
                format.resolve(),
            )
            .await?;
        },
        Commands::Web3 {
            input,
            section,
            format,
        } => {
            let source = Source::from_input(&input, &site.web3_data_path);
            commands::show_web3(&source, section.as_deref(), &config, format.resolve()).await?;
        },
        Commands::Gallery {
            input,
            tab,
            subtab,
            format,
        } => {
            let source = Source::from_input(&input, &site.gallery_index_path);
            commands::show_gallery(&source, tab, subtab, &config, format.resolve()).await?;
        },
        Commands::Route {
            path,
            user_agent,
            format,
        } => {
            commands::resolve_path(&path, user_agent.as_deref(), &config, format.resolve())?;
        },
        Commands::Config { .. } => {},
    }
    Ok(())
}
