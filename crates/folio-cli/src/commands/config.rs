//! Inspect or create the configuration file

use anyhow::{Context, Result, bail};
use folio_core::Config;
use std::path::{Path, PathBuf};

use crate::cli::ConfigCommands;

/// Config file the CLI reads: `--config` / `FOLIO_CONFIG`, else the platform default.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path().context("Failed to locate config directory"),
    }
}

/// Load the effective configuration: file, then environment overrides.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit)?;
    Config::load_at(&path).with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Execute a config subcommand
pub fn execute(command: &ConfigCommands, explicit: Option<&Path>) -> Result<()> {
    let path = config_path(explicit)?;
    match command {
        ConfigCommands::Show => {
            let config = load(explicit)?;
            let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{rendered}");
        },
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("Wrote default configuration to {}", path.display());
        },
    }
    Ok(())
}
