//! HTTP fetching of the site's markdown and JSON content.
//!
//! Paths resolve against the configured base URL. JSON resources can fall
//! back to built-in content through [`Fetcher::fetch_json_or`].

use crate::document::checksum;
use crate::load::LoadState;
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// HTTP client for the site's static content, bound to a base URL
pub struct Fetcher {
    client: Client,
    base: Url,
}

impl Fetcher {
    /// Creates a fetcher for content under `base_url` with a 30 second timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Creates a fetcher with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client, base })
    }

    /// Base URL all relative paths are resolved against
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves `path` against the base URL; absolute http(s) URLs pass through
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::InvalidUrl(format!("{path}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "unsupported scheme '{}' in {url}",
                url.scheme()
            )));
        }
        Ok(url)
    }

    /// Fetches a text resource
    pub async fn fetch_text(&self, path: &str) -> Result<FetchedText> {
        let url = self.resolve(path)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(map_send_error)?;
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(Error::NotFound(format!("Resource not found at '{url}'")));
            }

            match response.error_for_status() {
                Ok(_) => unreachable!("Status should be an error"),
                Err(err) => return Err(Error::Network(err)),
            }
        }

        let content = response.text().await?;
        let sha256 = checksum(&content);

        info!("Fetched {} bytes from {}", content.len(), url);

        Ok(FetchedText {
            url,
            content,
            sha256,
        })
    }

    /// Fetches and decodes a JSON resource
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let fetched = self.fetch_text(path).await?;
        serde_json::from_str(&fetched.content).map_err(|e| {
            Error::Serialization(format!("Invalid JSON from {}: {e}", fetched.url))
        })
    }

    /// Fetches a JSON resource, substituting `fallback` on any failure
    pub async fn fetch_json_or<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: T,
    ) -> LoadState<T> {
        let result = self.fetch_json(path).await;
        if let Err(err) = &result {
            warn!(category = err.category(), "Using fallback for {}: {}", path, err);
        }
        LoadState::from_result_or(result, fallback)
    }
}

/// A fetched text resource
#[derive(Debug, Clone)]
pub struct FetchedText {
    /// Final resolved URL
    pub url: Url,
    /// Response body
    pub content: String,
    /// Base64 `SHA256` of the body
    pub sha256: String,
}

fn parse_base(base_url: &str) -> Result<Url> {
    let mut base =
        Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "base URL must be http or https: {base_url}"
        )));
    }
    // Url::join replaces the last segment unless the path ends in '/'
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

fn map_send_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else {
        Error::Network(err)
    }
}
