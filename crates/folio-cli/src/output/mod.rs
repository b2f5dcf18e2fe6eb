//! # Output Formatting
//!
//! Commands render their results in one of three formats:
//!
//! - **Text**: Human-readable output with colors, see [`text`]
//! - **JSON**: One pretty-printed JSON document
//! - **JSONL**: One compact JSON value per line; lists emit one line per item
//!
//! ```bash
//! folio records resume.md --format jsonl | jq -r .title
//! ```

pub mod json;
pub mod text;

pub use json::{print_item, print_list};

/// Output format for command results
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output (default on a terminal)
    Text,
    /// Pretty-printed JSON (default when piped)
    Json,
    /// Newline-delimited JSON
    #[value(alias = "ndjson")]
    Jsonl,
}
