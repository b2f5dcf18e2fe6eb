//! Section splitting for content documents.
//!
//! A résumé or showcase document carries free-form prose first and a
//! structured-records region after a literal marker heading (`## Projects`).
//! [`split_sections`] divides the two on the first occurrence of that marker.
//!
//! ```rust
//! use folio_core::split::{split_sections, SplitMode};
//!
//! let doc = "# Max\nHello\n## Projects\n### One\n";
//! let sections = split_sections(doc, "## Projects", SplitMode::Exclusive);
//! assert_eq!(sections.preamble, "# Max\nHello\n");
//! assert_eq!(sections.body, "\n### One\n");
//! ```

use serde::{Deserialize, Serialize};

/// Whether the body returned by [`split_sections`] keeps the marker text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Body starts with the marker itself.
    Inclusive,
    /// Body starts immediately after the marker.
    #[default]
    Exclusive,
}

/// The two regions of a document, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Text before the marker (the whole document when the marker is absent).
    pub preamble: &'a str,
    /// Structured-records region; empty when the marker is absent.
    pub body: &'a str,
    /// Whether the marker occurred. The body can be empty even when it did.
    pub found: bool,
}

/// Split `document` on the first occurrence of `marker`.
///
/// A missing marker is a normal case: the whole input becomes the preamble and
/// the body is empty. An empty marker never matches.
#[must_use]
pub fn split_sections<'a>(document: &'a str, marker: &str, mode: SplitMode) -> Sections<'a> {
    let position = if marker.is_empty() {
        None
    } else {
        document.find(marker)
    };

    let Some(start) = position else {
        return Sections {
            preamble: document,
            body: "",
            found: false,
        };
    };

    let body_start = match mode {
        SplitMode::Inclusive => start,
        SplitMode::Exclusive => start + marker.len(),
    };

    Sections {
        preamble: &document[..start],
        body: &document[body_start..],
        found: true,
    }
}
