//! # CLI Structure and Argument Parsing
//!
//! `folio` previews the portfolio site's content from the terminal: it runs
//! the same split/parse pipeline the pages run and prints the result.
//!
//! ## Inputs
//!
//! Every content command takes an optional `INPUT`:
//!
//! - a file path
//! - `-` for stdin
//! - an `http(s)://` URL
//! - nothing, to fetch the configured path from the site's `base_url`
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Parse a local résumé, expanding the first two projects
//! folio resume content/resume.md --expand 0,1
//!
//! # Records from stdin as JSON lines
//! cat resume.md | folio records - --format jsonl
//!
//! # Fetch the showcase data from the live site
//! FOLIO_BASE_URL=https://maxzhangg.github.io/portfolio/ folio web3
//!
//! # Where would a path land?
//! folio route /portfolio/web3/research --user-agent "iPhone"
//! ```
//!
//! ## Output Formats
//!
//! - **text**: Colored, human-readable (default on a terminal)
//! - **json**: Pretty JSON (default when piped)
//! - **jsonl**: One JSON value per line

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::{ContributionsEnd, GalleryTab, SubTab, Viewport};
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `folio` command
#[derive(Parser, Clone, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "folio - parse and preview portfolio content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file (overrides autodiscovery). Also via `FOLIO_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands for the `folio` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Split a document at the section marker
    Split {
        #[command(flatten)]
        input: InputArg,
        /// Section marker (defaults to the configured marker)
        #[arg(long)]
        marker: Option<String>,
        /// Keep the marker at the start of the body
        #[arg(long)]
        inclusive: bool,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Parse the structured-records region into records
    Records {
        #[command(flatten)]
        input: InputArg,
        #[command(flatten)]
        parse: ParseArgs,
        #[command(flatten)]
        expand: ExpandArgs,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Render the résumé page: preamble plus project list
    Resume {
        #[command(flatten)]
        input: InputArg,
        /// Layout variant; overrides `--user-agent`
        #[arg(long, value_enum)]
        viewport: Option<ViewportArg>,
        /// Pick the layout from a `User-Agent` string
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
        /// Where contributions text stops (defaults to the configured rule)
        #[arg(long, value_enum)]
        contributions: Option<ContributionsArg>,
        #[command(flatten)]
        expand: ExpandArgs,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Show the Web3 showcase data, or one of its sections
    Web3 {
        #[command(flatten)]
        input: InputArg,
        /// Section page to show, e.g. `research`
        #[arg(long)]
        section: Option<String>,
        #[command(flatten)]
        format: FormatArg,
    },

    /// List gallery images by tab
    Gallery {
        #[command(flatten)]
        input: InputArg,
        /// Tab to show: featured, gallery, about
        #[arg(long, default_value = "featured")]
        tab: GalleryTab,
        /// Gallery sub-tab: models, girls, sapphic (gallery tab only)
        #[arg(long)]
        subtab: Option<SubTab>,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Resolve a request path to a page
    Route {
        /// Request path, e.g. `/portfolio/web3/research`
        path: String,
        /// Client `User-Agent`, for viewport detection
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Where a content command reads its document from
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputArg {
    /// File path, `-` for stdin, or an http(s) URL; omit to fetch from the site
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,
}

/// Overrides for the configured record parser
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseArgs {
    /// Section marker (defaults to the configured marker)
    #[arg(long)]
    pub marker: Option<String>,
    /// Record heading prefix (defaults to the configured prefix)
    #[arg(long)]
    pub prefix: Option<String>,
    /// Where contributions text stops
    #[arg(long, value_enum)]
    pub contributions: Option<ContributionsArg>,
}

/// Expansion flags applied before rendering
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandArgs {
    /// Toggle these record ids (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub expand: Vec<usize>,
    /// Toggle every record at once
    #[arg(long)]
    pub expand_all: bool,
}

/// Contributions termination rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContributionsArg {
    /// Stop at the next labeled line or the images line
    NextLabel,
    /// Run to the end of the record
    EndOfBlock,
}

impl From<ContributionsArg> for ContributionsEnd {
    fn from(arg: ContributionsArg) -> Self {
        match arg {
            ContributionsArg::NextLabel => Self::NextLabelOrImages,
            ContributionsArg::EndOfBlock => Self::EndOfBlock,
        }
    }
}

/// Résumé layout variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewportArg {
    /// Full-width cards
    Desktop,
    /// Stacked cards
    Mobile,
}

impl From<ViewportArg> for Viewport {
    fn from(arg: ViewportArg) -> Self {
        match arg {
            ViewportArg::Desktop => Self::Desktop,
            ViewportArg::Mobile => Self::Mobile,
        }
    }
}
