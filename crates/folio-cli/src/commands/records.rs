//! Parse a document's records and print them

use anyhow::{Result, bail};
use folio_core::{Config, RecordList, parse_document};

use super::{Source, apply_expansion, load_text};
use crate::cli::{ExpandArgs, ParseArgs};
use crate::output::{OutputFormat, print_list, text};

/// Execute the records command
pub async fn execute(
    source: &Source,
    parse: &ParseArgs,
    expand: &ExpandArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let document = load_text(source, config).await?;

    let mut options = config.parse.options();
    if let Some(marker) = &parse.marker {
        options.marker.clone_from(marker);
    }
    if let Some(prefix) = &parse.prefix {
        if prefix.is_empty() {
            bail!("--prefix must not be empty");
        }
        options.rules.record_prefix.clone_from(prefix);
    }
    if let Some(end) = parse.contributions {
        options.rules.contributions_end = end.into();
    }

    let parsed = parse_document(&document, &options);
    tracing::debug!("Parsed {} records", parsed.records.len());

    let mut list = RecordList::new(parsed.records);
    apply_expansion(&mut list, expand);

    match format {
        OutputFormat::Text => print!("{}", text::render_records(&list)),
        OutputFormat::Json | OutputFormat::Jsonl => print_list(list.records(), format)?,
    }
    Ok(())
}
