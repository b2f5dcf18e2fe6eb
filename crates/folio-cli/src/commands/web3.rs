//! Show the Web3 showcase, or one of its section pages

use anyhow::{Result, bail};
use folio_core::{Config, Web3Data};

use super::{Source, load_json_or};
use crate::output::{OutputFormat, print_item, text};

/// Execute the web3 command
pub async fn execute(
    source: &Source,
    section: Option<&str>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let state = load_json_or(source, config, Web3Data::fallback()).await?;
    let data = state.into_value().unwrap_or_else(Web3Data::fallback);

    if let Some(name) = section {
        let Some(page) = data.section(name) else {
            let known: Vec<&str> = data.sections.keys().map(String::as_str).collect();
            if known.is_empty() {
                bail!("Section '{name}' not found; the showcase data declares no sections");
            }
            bail!("Section '{name}' not found. Available: {}", known.join(", "));
        };
        match format {
            OutputFormat::Text => print!("{}", text::render_section_page(page)),
            OutputFormat::Json | OutputFormat::Jsonl => print_item(page, format)?,
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print!("{}", text::render_web3(&data, &config.site.base_path())),
        OutputFormat::Json | OutputFormat::Jsonl => print_item(&data, format)?,
    }
    Ok(())
}
