//! Record parsing for the structured-records region of a document.
//!
//! The region is a run of level-3 headings, each followed by labeled lines of
//! the form `**Label:** value` and an optional free-form contributions block:
//!
//! ```markdown
//! ### [ProofKit](https://example.com/proofkit)
//! **Date:** 2025-01
//! **Tags:** ZK, Circom
//! **Key Contributions:**
//! Built the circuit.
//! ```
//!
//! [`parse_records`] turns that text into ordered [`Record`]s. Parsing never
//! fails; anything missing falls back to an empty value, and a body without
//! sub-headings simply yields no records.
//!
//! ```rust
//! use folio_core::record::parse_records;
//!
//! let records = parse_records("### Just A Title\n**Date:** 2024\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].title, "Just A Title");
//! assert_eq!(records[0].link, "#");
//! assert_eq!(records[0].date, "2024");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Link value used when a record's title line carries no markdown link.
pub const NO_LINK: &str = "#";

/// Sub-heading prefix that opens a record block.
pub const DEFAULT_RECORD_PREFIX: &str = "### ";

/// Regex for the first markdown link on a title line: [text](target)
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static TITLE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Regex for any labeled line: **Label:**
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static LABELED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[^*]+:\*\*").unwrap());

/// One project or post parsed from a record block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based position among the non-empty blocks of the region.
    pub id: usize,
    /// Link text of the title line, or the trimmed title line itself.
    pub title: String,
    /// Link target of the title line, [`NO_LINK`] when absent.
    pub link: String,
    /// `**Date:**` value.
    #[serde(default)]
    pub date: String,
    /// `**Type:**` value.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// `**Tags:**` value split on commas.
    #[serde(default)]
    pub tags: Vec<String>,
    /// `**Read:**` value (reading time for posts).
    #[serde(default)]
    pub read: String,
    /// `**Description:**` value.
    #[serde(default)]
    pub description: String,
    /// `**Images:**` value split on commas.
    #[serde(default)]
    pub images: Vec<String>,
    /// Lines following `**Key Contributions:**`.
    #[serde(alias = "body", default)]
    pub contributions: String,
    /// Presentation-only expansion flag; always `false` after parsing.
    #[serde(default)]
    pub expanded: bool,
}

impl Record {
    /// Whether the title line carried a link.
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.link != NO_LINK
    }

    /// Field-for-field equality that ignores [`Record::expanded`].
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.link == other.link
            && self.date == other.date
            && self.kind == other.kind
            && self.tags == other.tags
            && self.read == other.read
            && self.description == other.description
            && self.images == other.images
            && self.contributions == other.contributions
    }
}

/// Labels recognised on `**Label:** value` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// `**Date:**`
    Date,
    /// `**Type:**`
    Type,
    /// `**Tags:**`
    Tags,
    /// `**Read:**`
    Read,
    /// `**Description:**`
    Description,
    /// `**Images:**`
    Images,
    /// `**Key Contributions:**`
    KeyContributions,
}

impl Label {
    /// Every label, in document order of the reference layout.
    pub const ALL: [Self; 7] = [
        Self::Date,
        Self::Type,
        Self::Tags,
        Self::Read,
        Self::Description,
        Self::Images,
        Self::KeyContributions,
    ];

    /// The `**Label:**` wrapper for this label.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Date => "**Date:**",
            Self::Type => "**Type:**",
            Self::Tags => "**Tags:**",
            Self::Read => "**Read:**",
            Self::Description => "**Description:**",
            Self::Images => "**Images:**",
            Self::KeyContributions => "**Key Contributions:**",
        }
    }

    /// Remainder of `line` after this label's marker, if the trimmed line
    /// starts with it (case-insensitive on the label text).
    #[must_use]
    pub fn value_in(self, line: &str) -> Option<&str> {
        let trimmed = line.trim();
        let marker = self.marker();
        let head = trimmed.get(..marker.len())?;
        if head.eq_ignore_ascii_case(marker) {
            Some(trimmed[marker.len()..].trim())
        } else {
            None
        }
    }
}

/// Where the contributions text of a record stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionsEnd {
    /// Stop at the next labeled line or the `**Images:**` line.
    #[default]
    NextLabelOrImages,
    /// Run to the end of the record block.
    EndOfBlock,
}

/// Parameters shared by every surface that renders records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRules {
    /// Line prefix that opens a record block.
    pub record_prefix: String,
    /// Labels extracted from each block; others keep their empty default.
    pub labels: Vec<Label>,
    /// Termination rule for the contributions text.
    pub contributions_end: ContributionsEnd,
}

impl Default for RecordRules {
    fn default() -> Self {
        Self {
            record_prefix: DEFAULT_RECORD_PREFIX.to_string(),
            labels: Label::ALL.to_vec(),
            contributions_end: ContributionsEnd::default(),
        }
    }
}

impl RecordRules {
    /// Label set used by the résumé project list.
    #[must_use]
    pub fn resume() -> Self {
        Self {
            labels: vec![
                Label::Date,
                Label::Description,
                Label::Images,
                Label::KeyContributions,
            ],
            ..Self::default()
        }
    }

    /// Same rules with a different contributions termination rule.
    #[must_use]
    pub fn with_contributions_end(mut self, end: ContributionsEnd) -> Self {
        self.contributions_end = end;
        self
    }

    fn enables(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }
}

/// Parse a structured-records region with the default rules.
#[must_use]
pub fn parse_records(body: &str) -> Vec<Record> {
    parse_records_with(body, &RecordRules::default())
}

/// Parse a structured-records region into ordered records.
///
/// Text before the first sub-heading is not a record. Whitespace-only blocks
/// are dropped before ids are assigned, so ids are contiguous from zero.
#[must_use]
pub fn parse_records_with(body: &str, rules: &RecordRules) -> Vec<Record> {
    record_blocks(body, &rules.record_prefix)
        .into_iter()
        .enumerate()
        .map(|(id, block)| parse_block(id, block, rules))
        .collect()
}

fn record_blocks<'a>(body: &'a str, prefix: &str) -> Vec<&'a str> {
    if prefix.is_empty() {
        return Vec::new();
    }

    let starts: Vec<usize> = std::iter::once(0)
        .chain(body.match_indices('\n').map(|(i, _)| i + 1))
        .filter(|&i| body[i..].starts_with(prefix))
        .collect();

    starts
        .iter()
        .enumerate()
        .filter_map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(body.len());
            body.get(start + prefix.len()..end)
        })
        .filter(|block| !block.trim().is_empty())
        .collect()
}

fn parse_block(id: usize, block: &str, rules: &RecordRules) -> Record {
    let lines: Vec<&str> = block.trim().lines().collect();
    let title_line = lines.first().copied().unwrap_or_default();

    let (title, link) = TITLE_LINK_RE.captures(title_line).map_or_else(
        || (title_line.trim().to_string(), NO_LINK.to_string()),
        |caps| (caps[1].to_string(), caps[2].to_string()),
    );

    let scalar = |label: Label| -> String {
        if rules.enables(label) {
            find_value(&lines, label).unwrap_or_default().to_string()
        } else {
            String::new()
        }
    };
    let list = |label: Label| -> Vec<String> {
        if rules.enables(label) {
            find_value(&lines, label).map(split_list).unwrap_or_default()
        } else {
            Vec::new()
        }
    };

    Record {
        id,
        title,
        link,
        date: scalar(Label::Date),
        kind: scalar(Label::Type),
        tags: list(Label::Tags),
        read: scalar(Label::Read),
        description: scalar(Label::Description),
        images: list(Label::Images),
        contributions: contributions(&lines, rules),
        expanded: false,
    }
}

fn find_value<'a>(lines: &[&'a str], label: Label) -> Option<&'a str> {
    lines.iter().find_map(|line| label.value_in(line))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_labeled_line(line: &str) -> bool {
    LABELED_LINE_RE.is_match(line.trim())
}

fn contributions(lines: &[&str], rules: &RecordRules) -> String {
    if !rules.enables(Label::KeyContributions) {
        return String::new();
    }

    let Some(start) = lines
        .iter()
        .position(|line| Label::KeyContributions.value_in(line).is_some())
    else {
        return String::new();
    };

    let rest = &lines[start + 1..];
    let end = match rules.contributions_end {
        ContributionsEnd::EndOfBlock => rest.len(),
        ContributionsEnd::NextLabelOrImages => rest
            .iter()
            .position(|line| is_labeled_line(line) || Label::Images.value_in(line).is_some())
            .unwrap_or(rest.len()),
    };

    rest[..end].join("\n").trim().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::needless_raw_string_hashes)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PROOFKIT: &str = r#"## Projects
### [ProofKit](https://example.com/proofkit)
**Date:** 2025-01
**Type:** ZK Protocol
**Tags:** ZK, Circom
**Description:** Privacy proofs.
**Images:** img1.png, img2.png
**Key Contributions:**
Built the circuit.
Shipped the demo.
"#;

    #[test]
    fn test_full_record_is_extracted() {
        let records = parse_records(PROOFKIT);
        assert_eq!(records.len(), 1);

        let expected = Record {
            id: 0,
            title: "ProofKit".to_string(),
            link: "https://example.com/proofkit".to_string(),
            date: "2025-01".to_string(),
            kind: "ZK Protocol".to_string(),
            tags: vec!["ZK".to_string(), "Circom".to_string()],
            read: String::new(),
            description: "Privacy proofs.".to_string(),
            images: vec!["img1.png".to_string(), "img2.png".to_string()],
            contributions: "Built the circuit.\nShipped the demo.".to_string(),
            expanded: false,
        };
        assert_eq!(records[0], expected);
    }

    #[test]
    fn test_title_without_link_uses_sentinel() {
        let records = parse_records("### Just A Title\n");
        assert_eq!(records[0].title, "Just A Title");
        assert_eq!(records[0].link, NO_LINK);
        assert!(!records[0].has_link());
    }

    #[test]
    fn test_contributions_stop_at_images_line() {
        let body = "### A\n**Key Contributions:**\n**Images:** a.png, , b.png\n";
        let records = parse_records(body);
        assert_eq!(records[0].contributions, "");
        assert_eq!(records[0].images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_contributions_stop_at_next_label() {
        let body = "### A\n**Key Contributions:**\nDid things.\n**Read:** 4 min\ntrailer\n";
        let records = parse_records(body);
        assert_eq!(records[0].contributions, "Did things.");
        assert_eq!(records[0].read, "4 min");
    }

    #[test]
    fn test_end_of_block_rule_keeps_trailing_lines() {
        let body = "### A\n**Key Contributions:**\nDid things.\n**Images:** a.png\n";
        let rules = RecordRules::default().with_contributions_end(ContributionsEnd::EndOfBlock);
        let records = parse_records_with(body, &rules);
        assert_eq!(records[0].contributions, "Did things.\n**Images:** a.png");
        assert_eq!(records[0].images, vec!["a.png"]);
    }

    #[test]
    fn test_labels_are_case_insensitive_and_indented() {
        let body = "### A\n  **DATE:** 2023-07\n**key contributions:**\nx\n";
        let records = parse_records(body);
        assert_eq!(records[0].date, "2023-07");
        assert_eq!(records[0].contributions, "x");
    }

    #[test]
    fn test_first_labeled_line_wins() {
        let body = "### A\n**Date:** first\n**Date:** second\n";
        assert_eq!(parse_records(body)[0].date, "first");
    }

    #[test]
    fn test_missing_labels_degrade_to_defaults() {
        let records = parse_records("### Bare\nsome prose\n");
        let record = &records[0];
        assert!(record.date.is_empty());
        assert!(record.kind.is_empty());
        assert!(record.tags.is_empty());
        assert!(record.images.is_empty());
        assert!(record.contributions.is_empty());
        assert!(!record.expanded);
    }

    #[test]
    fn test_resume_rules_ignore_showcase_labels() {
        let body = "### A\n**Type:** Talk\n**Tags:** x\n**Date:** 2022\n";
        let records = parse_records_with(body, &RecordRules::resume());
        assert_eq!(records[0].date, "2022");
        assert!(records[0].kind.is_empty());
        assert!(records[0].tags.is_empty());
    }

    #[test]
    fn test_text_before_first_heading_is_not_a_record() {
        let body = "Intro paragraph.\n\n### One\n### Two\n";
        let records = parse_records(body);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_whitespace_blocks_are_dropped_before_indexing() {
        let body = "### \n   \n### Real\n### Also\n";
        let records = parse_records(body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].title, "Real");
        assert_eq!(records[1].id, 1);
    }

    #[test]
    fn test_prefix_only_matches_at_line_start() {
        let body = "### One\ntext with ### inside\n####Not a heading\n";
        let records = parse_records(body);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_crlf_lines_are_handled() {
        let body = "### [Site](https://x.dev)\r\n**Date:** 2021\r\n";
        let records = parse_records(body);
        assert_eq!(records[0].title, "Site");
        assert_eq!(records[0].date, "2021");
    }

    #[test]
    fn test_only_first_link_on_title_line_is_used() {
        let records = parse_records("### [A](one) and [B](two)\n");
        assert_eq!(records[0].title, "A");
        assert_eq!(records[0].link, "one");
    }

    #[test]
    fn test_record_serializes_type_field() {
        let records = parse_records("### A\n**Type:** Audit\n");
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["type"], "Audit");
        assert_eq!(json["contributions"], "");
    }

    #[test]
    fn test_label_value_in() {
        assert_eq!(Label::Tags.value_in("**tags:**  a, b "), Some("a, b"));
        assert_eq!(Label::Tags.value_in("tags: a"), None);
        assert_eq!(Label::Date.value_in("**Dat"), None);
    }

    proptest! {
        #[test]
        fn test_bodies_without_headings_yield_nothing(body in "[a-zA-Z0-9 \n*:,]{0,300}") {
            prop_assert!(parse_records(&body).is_empty());
        }

        #[test]
        fn test_ids_follow_source_order(titles in prop::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,20}", 0..8)) {
            let body: String = titles.iter().map(|t| format!("### {t}\n**Date:** d\n")).collect();
            let records = parse_records(&body);
            prop_assert_eq!(records.len(), titles.len());
            for (index, (record, title)) in records.iter().zip(&titles).enumerate() {
                prop_assert_eq!(record.id, index);
                prop_assert_eq!(&record.title, title.trim());
            }
        }

        #[test]
        fn test_parsing_is_idempotent(body in "(### [a-z]{1,8}\n(\\*\\*(Date|Tags|Images|Key Contributions):\\*\\* [a-z, ]{0,10}\n|[a-z ]{0,12}\n){0,5}){0,4}") {
            let first = parse_records(&body);
            let second = parse_records(&body);
            prop_assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(&second) {
                prop_assert!(a.same_content(b));
                prop_assert!(!a.expanded);
            }
        }
    }
}
