//! Whole-document parsing: preamble prose plus the record list.
//!
//! This is the pipeline the résumé and showcase pages run on every fetched
//! markdown document: [`split_sections`] followed by [`parse_records_with`].

use crate::record::{Record, RecordRules, parse_records_with};
use crate::split::{SplitMode, split_sections};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Heading that opens the structured-records region.
pub const DEFAULT_SECTION_MARKER: &str = "## Projects";

/// Marker, split mode and record rules for one rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Literal heading that divides preamble from records.
    pub marker: String,
    /// Whether the records region keeps the marker.
    pub mode: SplitMode,
    /// Record parser rules.
    pub rules: RecordRules,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_SECTION_MARKER.to_string(),
            mode: SplitMode::Exclusive,
            rules: RecordRules::default(),
        }
    }
}

/// Result of parsing one content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    /// Markdown before the section marker, rendered as rich text.
    pub preamble: String,
    /// Records from the structured region, in source order.
    pub records: Vec<Record>,
    /// Base64 SHA-256 of the source text.
    pub checksum: String,
}

/// Split `text` and parse its records.
#[must_use]
pub fn parse_document(text: &str, options: &ParseOptions) -> ParsedDocument {
    let sections = split_sections(text, &options.marker, options.mode);
    ParsedDocument {
        preamble: sections.preamble.to_string(),
        records: parse_records_with(sections.body, &options.rules),
        checksum: checksum(text),
    }
}

/// Base64-encoded SHA-256 of `content`.
#[must_use]
pub fn checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    STANDARD.encode(hasher.finalize())
}
