//! folio CLI - parse and preview portfolio content
//!
//! Thin entry point; everything lives in the library so integration tests
//! can drive the same code paths.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    folio_cli::run().await
}
