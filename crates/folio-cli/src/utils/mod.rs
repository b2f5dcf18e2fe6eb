//! Shared helpers for the folio CLI

pub mod cli_args;
pub mod logging;

pub use logging::initialize_logging;
