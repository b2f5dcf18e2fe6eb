//! Error types and handling for folio-core operations.
//!
//! The markdown transformations in [`crate::split`] and [`crate::record`] never
//! fail: missing structure degrades to documented defaults. Everything that can
//! fail lives around them (fetching content, reading configuration, decoding
//! JSON) and reports through the [`Error`] type defined here.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading local content or configuration files
//! - **Network Errors**: HTTP requests against the content host
//! - **Parse Errors**: content that cannot be interpreted at all
//! - **Configuration Errors**: invalid settings or config files
//! - **Serialization Errors**: TOML/JSON encoding and decoding
//!
//! ## Recovery Hints
//!
//! ```rust
//! use folio_core::Error;
//!
//! let err = Error::Timeout("resume.md took too long".to_string());
//! if err.is_recoverable() {
//!     println!("retrying after {} failure", err.category());
//! }
//! ```

use thiserror::Error;

/// The main error type for folio-core operations.
///
/// `Display` gives a user-facing message; the source chain is kept for
/// variants that wrap another error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading local markdown/JSON content and configuration files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Covers HTTP requests for résumé markdown, Web3 data and gallery indexes.
    /// Connection and timeout errors are recoverable; other statuses are not.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Content could not be interpreted.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// URL is malformed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Operation timed out.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use folio_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Timeout("slow host".to_string()).is_recoverable());
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "eintr")).is_recoverable());
    /// assert!(!Error::Config("bad base_url".to_string()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout(_) => true,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Used as a structured field when errors are logged:
    ///
    /// ```rust
    /// use folio_core::Error;
    ///
    /// let err = Error::NotFound("resume.md".to_string());
    /// assert_eq!(err.category(), "not_found");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Timeout(_) => "timeout",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
