//! # folio-core
//!
//! Content pipeline for a personal portfolio site: a résumé, a Web3 showcase
//! and a photography gallery, all driven by static markdown and JSON files.
//!
//! The central piece is a two-stage markdown parser. A document is split at a
//! fixed heading into a free-form preamble and a structured-records region,
//! and the region is cut into [`Record`]s at each `### ` sub-heading, with
//! fields pulled from `**Label:**` lines.
//!
//! ## Components
//!
//! - **Parsing**: [`split_sections`], [`parse_records`], [`parse_document`]
//! - **Expansion state**: [`RecordList`] tracks which records are expanded
//! - **Fetching**: [`Fetcher`] loads content relative to the site base URL
//! - **Load state**: [`LoadState`] and [`RequestGate`] model in-flight fetches
//! - **Pages**: [`web3`], [`gallery`] and [`route`] hold per-page data
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::{ParseOptions, RecordList, parse_document};
//!
//! let text = "# Max\nHello.\n\n## Projects\n### [Site](https://x.dev)\n**Date:** 2024\n";
//! let doc = parse_document(text, &ParseOptions::default());
//! assert_eq!(doc.records[0].title, "Site");
//!
//! let mut list = RecordList::new(doc.records);
//! list.toggle_all();
//! assert!(list.records().iter().all(|r| r.expanded));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`]. Parsing itself never
//! fails; malformed content yields empty fields instead.
//!
//! ```rust
//! use folio_core::{Error, Fetcher};
//!
//! match Fetcher::new("not a url") {
//!     Err(Error::InvalidUrl(msg)) => eprintln!("bad base: {msg}"),
//!     Err(e) if e.is_recoverable() => eprintln!("retry later: {e}"),
//!     Err(e) => eprintln!("fatal: {e}"),
//!     Ok(_) => {},
//! }
//! ```

/// Layered configuration (file, environment)
pub mod config;
/// Preamble + records pipeline and content checksums
pub mod document;
/// Error types and result aliases
pub mod error;
/// HTTP fetching relative to the site base URL
pub mod fetcher;
/// Photography gallery index and tabs
pub mod gallery;
/// Fetch lifecycle and stale-response gating
pub mod load;
/// Record block parsing
pub mod record;
/// Page routing and viewport selection
pub mod route;
/// Section splitting
pub mod split;
/// Expand/collapse state over a record list
pub mod toggle;
/// Web3 showcase data
pub mod web3;

// Re-export commonly used types
pub use config::{Config, FetchConfig, ParseConfig, SiteConfig};
pub use document::{DEFAULT_SECTION_MARKER, ParseOptions, ParsedDocument, checksum, parse_document};
pub use error::{Error, Result};
pub use fetcher::{FetchedText, Fetcher};
pub use gallery::{GalleryMap, GalleryTab, SubTab};
pub use load::{LoadState, RequestGate, Ticket};
pub use record::{
    ContributionsEnd, DEFAULT_RECORD_PREFIX, Label, NO_LINK, Record, RecordRules, parse_records,
    parse_records_with,
};
pub use route::{NavLink, Route, RouteMatch, Viewport, nav_links, resolve_route};
pub use split::{Sections, SplitMode, split_sections};
pub use toggle::RecordList;
pub use web3::Web3Data;
