//! Render the résumé page

use anyhow::Result;
use folio_core::{
    Config, ContributionsEnd, Record, RecordList, RecordRules, Viewport, parse_document,
};
use serde::Serialize;

use super::{Source, apply_expansion, load_text};
use crate::cli::ExpandArgs;
use crate::output::{OutputFormat, print_item, text};

#[derive(Debug, Serialize)]
struct ResumeView<'a> {
    viewport: Viewport,
    preamble: &'a str,
    records: &'a [Record],
    all_expanded: bool,
    checksum: &'a str,
}

/// Layout to render: an explicit viewport wins over user-agent detection,
/// and desktop is used when neither was given.
#[must_use]
pub fn select_viewport(explicit: Option<Viewport>, user_agent: Option<&str>) -> Viewport {
    explicit
        .or_else(|| user_agent.map(Viewport::from_user_agent))
        .unwrap_or_default()
}

/// Execute the resume command
pub async fn execute(
    source: &Source,
    viewport: Viewport,
    contributions: Option<ContributionsEnd>,
    expand: &ExpandArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let document = load_text(source, config).await?;

    let mut options = config.parse.options_with(RecordRules::resume());
    if let Some(end) = contributions {
        options.rules.contributions_end = end;
    }

    let parsed = parse_document(&document, &options);
    let mut list = RecordList::new(parsed.records);
    apply_expansion(&mut list, expand);

    match format {
        OutputFormat::Text => print!("{}", text::render_resume(&parsed.preamble, &list, viewport)),
        OutputFormat::Json | OutputFormat::Jsonl => {
            let view = ResumeView {
                viewport,
                preamble: &parsed.preamble,
                records: list.records(),
                all_expanded: list.all_expanded(),
                checksum: &parsed.checksum,
            };
            print_item(&view, format)?;
        },
    }
    Ok(())
}
