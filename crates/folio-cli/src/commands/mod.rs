//! Command implementations for the folio CLI
//!
//! Each command lives in its own submodule. Content commands share the input
//! handling defined here.

pub mod config;
mod gallery;
mod records;
mod resume;
mod route;
mod split;
mod web3;

pub use config::execute as manage_config;
pub use gallery::execute as show_gallery;
pub use records::execute as show_records;
pub use resume::{execute as show_resume, select_viewport};
pub use route::execute as resolve_path;
pub use split::execute as split_document;
pub use web3::execute as show_web3;

use anyhow::{Context, Result};
use folio_core::{Config, Fetcher, LoadState, RecordList};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::cli::{ExpandArgs, InputArg};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// Local file
    File(PathBuf),
    /// Absolute http(s) URL
    Url(String),
    /// Path relative to the configured site base URL
    Site(String),
}

impl Source {
    /// Classify the positional input; `default_path` is used when it is absent.
    pub fn from_input(input: &InputArg, default_path: &str) -> Self {
        match input.input.as_deref() {
            None => Self::Site(default_path.to_string()),
            Some("-") => Self::Stdin,
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                Self::Url(raw.to_string())
            },
            Some(raw) => Self::File(PathBuf::from(raw)),
        }
    }

    fn remote_path(&self) -> Option<&str> {
        match self {
            Self::Url(path) | Self::Site(path) => Some(path),
            Self::Stdin | Self::File(_) => None,
        }
    }
}

fn fetcher(config: &Config) -> Result<Fetcher> {
    Fetcher::with_timeout(&config.site.base_url, config.fetch.timeout())
        .context("Failed to create HTTP client")
}

/// Read the whole document from `source`.
pub async fn load_text(source: &Source, config: &Config) -> Result<String> {
    match source {
        Source::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        },
        Source::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        Source::Url(path) | Source::Site(path) => {
            let fetched = fetcher(config)?.fetch_text(path).await?;
            debug!("content checksum {}", fetched.sha256);
            Ok(fetched.content)
        },
    }
}

/// Load JSON content, substituting `fallback` when it cannot be read or decoded.
pub async fn load_json_or<T: DeserializeOwned>(
    source: &Source,
    config: &Config,
    fallback: T,
) -> Result<LoadState<T>> {
    if let Some(path) = source.remote_path() {
        return Ok(fetcher(config)?.fetch_json_or(path, fallback).await);
    }

    let decoded = load_text(source, config)
        .await
        .and_then(|text| serde_json::from_str(&text).context("Invalid JSON"));
    if let Err(err) = &decoded {
        warn!("Showing fallback content; read failed: {err:#}");
    }
    Ok(LoadState::from_result_or(decoded, fallback))
}

/// Apply `--expand` ids then `--expand-all` to a freshly parsed list.
pub fn apply_expansion(list: &mut RecordList, args: &ExpandArgs) {
    for &id in &args.expand {
        if !list.toggle_one(id) {
            warn!("No record with id {id}");
        }
    }
    if args.expand_all {
        list.toggle_all();
    }
}
