//! Split a document into preamble and structured-records region

use anyhow::Result;
use folio_core::{Config, SplitMode, split_sections};
use serde::Serialize;

use super::{Source, load_text};
use crate::output::{OutputFormat, print_item, text};

#[derive(Debug, Serialize)]
struct SplitView<'a> {
    marker: &'a str,
    mode: SplitMode,
    found: bool,
    preamble: &'a str,
    body: &'a str,
}

/// Execute the split command
pub async fn execute(
    source: &Source,
    marker: Option<&str>,
    inclusive: bool,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let document = load_text(source, config).await?;
    let marker = marker.unwrap_or(config.parse.section_marker.as_str());
    let mode = if inclusive {
        SplitMode::Inclusive
    } else {
        config.parse.body_mode
    };

    let sections = split_sections(&document, marker, mode);
    if !sections.found {
        tracing::info!("Marker '{marker}' not found; whole document is preamble");
    }

    match format {
        OutputFormat::Text => print!("{}", text::render_sections(&sections)),
        OutputFormat::Json | OutputFormat::Jsonl => {
            let view = SplitView {
                marker,
                mode,
                found: sections.found,
                preamble: sections.preamble,
                body: sections.body,
            };
            print_item(&view, format)?;
        },
    }
    Ok(())
}
