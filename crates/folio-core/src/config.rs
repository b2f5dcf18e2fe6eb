//! Configuration management for folio.
//!
//! Settings are stored in TOML and cover where site content is served from,
//! how it is fetched, and which markers the record parser looks for.
//!
//! ## Configuration Sources
//!
//! 1. **Config file**: `--config <path>`, `FOLIO_CONFIG`, or the platform config
//!    directory (see [`Config::default_path`])
//! 2. **Environment variables**: `FOLIO_BASE_URL`, `FOLIO_TIMEOUT_SECS`
//!
//! A missing file is not an error; defaults are used instead.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [site]
//! base_url = "https://maxzhangg.github.io/portfolio/"
//! resume_path = "resume.md"
//! web3_data_path = "web3/web3-data.json"
//! gallery_index_path = "photo/PhotoName.json"
//!
//! [fetch]
//! timeout_secs = 30
//!
//! [parse]
//! section_marker = "## Projects"
//! record_prefix = "### "
//! body_mode = "exclusive"
//! contributions_end = "next_label_or_images"
//! ```

use crate::document::ParseOptions;
use crate::record::{ContributionsEnd, DEFAULT_RECORD_PREFIX, RecordRules};
use crate::route::DEFAULT_BASE_PATH;
use crate::split::SplitMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
/// Environment variable overriding [`SiteConfig::base_url`].
pub const BASE_URL_ENV: &str = "FOLIO_BASE_URL";
/// Environment variable overriding [`FetchConfig::timeout_secs`].
pub const TIMEOUT_ENV: &str = "FOLIO_TIMEOUT_SECS";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Where the site content lives
    pub site: SiteConfig,
    /// HTTP behaviour
    pub fetch: FetchConfig,
    /// Record parser settings
    pub parse: ParseConfig,
}

/// Location of the site's static content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute URL the content is served from, ending in `/`.
    pub base_url: String,
    /// Résumé markdown, relative to `base_url`.
    pub resume_path: String,
    /// Web3 showcase JSON, relative to `base_url`.
    pub web3_data_path: String,
    /// Gallery index JSON, relative to `base_url`.
    pub gallery_index_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173/portfolio/".to_string(),
            resume_path: "resume.md".to_string(),
            web3_data_path: "web3/web3-data.json".to_string(),
            gallery_index_path: "photo/PhotoName.json".to_string(),
        }
    }
}

impl SiteConfig {
    /// Path component of `base_url`; the router's mount point.
    ///
    /// Falls back to [`DEFAULT_BASE_PATH`] when `base_url` does not parse.
    #[must_use]
    pub fn base_path(&self) -> String {
        url::Url::parse(&self.base_url)
            .map_or_else(|_| DEFAULT_BASE_PATH.to_string(), |url| url.path().to_string())
    }
}

/// HTTP fetch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl FetchConfig {
    /// Timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Section and record markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Heading that opens the structured-records region.
    pub section_marker: String,
    /// Sub-heading prefix that opens each record.
    pub record_prefix: String,
    /// Whether the records region keeps the marker.
    pub body_mode: SplitMode,
    /// Where contributions text stops.
    pub contributions_end: ContributionsEnd,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            section_marker: crate::document::DEFAULT_SECTION_MARKER.to_string(),
            record_prefix: DEFAULT_RECORD_PREFIX.to_string(),
            body_mode: SplitMode::Exclusive,
            contributions_end: ContributionsEnd::NextLabelOrImages,
        }
    }
}

impl ParseConfig {
    /// Build parser options using `rules` as the label set.
    #[must_use]
    pub fn options_with(&self, rules: RecordRules) -> ParseOptions {
        ParseOptions {
            marker: self.section_marker.clone(),
            mode: self.body_mode,
            rules: RecordRules {
                record_prefix: self.record_prefix.clone(),
                contributions_end: self.contributions_end,
                ..rules
            },
        }
    }

    /// Parser options with every label enabled.
    #[must_use]
    pub fn options(&self) -> ParseOptions {
        self.options_with(RecordRules::default())
    }
}

impl Config {
    /// Load configuration from `FOLIO_CONFIG` or the default location.
    ///
    /// Environment overrides are applied and the result is validated.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(explicit) => PathBuf::from(explicit),
            None => Self::default_path()?,
        };
        Self::load_at(&path)
    }

    /// Load configuration from an explicit file, then apply environment
    /// overrides and validate.
    pub fn load_at(path: &Path) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;

        Ok(())
    }

    /// Apply `FOLIO_*` overrides read through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.site.base_url = base_url;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            self.fetch.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{TIMEOUT_ENV} must be an integer, got '{raw}'"))
            })?;
        }

        Ok(())
    }

    /// Check that settings are usable.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.site.base_url)
            .map_err(|e| Error::Config(format!("Invalid base_url '{}': {e}", self.site.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::Config("fetch.timeout_secs must be positive".into()));
        }
        if self.parse.section_marker.is_empty() {
            return Err(Error::Config("parse.section_marker must not be empty".into()));
        }
        if self.parse.record_prefix.is_empty() {
            return Err(Error::Config("parse.record_prefix must not be empty".into()));
        }
        Ok(())
    }

    /// Platform config file location.
    ///
    /// - Linux: `~/.config/folio/config.toml`
    /// - macOS: `~/Library/Application Support/dev.folio.folio/config.toml`
    /// - Windows: `%APPDATA%\folio\folio\config\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "folio", "folio")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.site.resume_path, "resume.md");
        assert_eq!(config.site.web3_data_path, "web3/web3-data.json");
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.parse.section_marker, "## Projects");
        assert_eq!(config.parse.record_prefix, "### ");
        assert_eq!(config.parse.body_mode, SplitMode::Exclusive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.site.base_url = "https://example.com/portfolio/".to_string();
        config.parse.contributions_end = ContributionsEnd::EndOfBlock;
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[parse]\nbody_mode = \"inclusive\"\n").unwrap();

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.parse.body_mode, SplitMode::Inclusive);
        assert_eq!(loaded.parse.section_marker, "## Projects");
        assert_eq!(loaded.site, SiteConfig::default());
        Ok(())
    }

    #[test]
    fn test_config_parse_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[site\nbase_url = ").unwrap();

        match Config::load_from(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = HashMap::from([
            (BASE_URL_ENV, "https://cdn.example.com/site/"),
            (TIMEOUT_ENV, " 5 "),
        ]);
        let mut config = Config::default();
        config.apply_env_with(|key| env.get(key).map(ToString::to_string))?;
        assert_eq!(config.site.base_url, "https://cdn.example.com/site/");
        assert_eq!(config.fetch.timeout(), Duration::from_secs(5));
        Ok(())
    }

    #[test]
    fn test_env_timeout_must_be_numeric() {
        let mut config = Config::default();
        let result = config.apply_env_with(|key| (key == TIMEOUT_ENV).then(|| "soon".to_string()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.site.base_url = "/portfolio/".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.site.base_url = "ftp://example.com/".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.parse.record_prefix.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_path_from_url() {
        let mut site = SiteConfig::default();
        assert_eq!(site.base_path(), "/portfolio/");
        site.base_url = "https://maxzhangg.github.io/".to_string();
        assert_eq!(site.base_path(), "/");
        site.base_url = "not a url".to_string();
        assert_eq!(site.base_path(), DEFAULT_BASE_PATH);
    }

    #[test]
    fn test_parse_options_carry_config() {
        let mut parse = ParseConfig::default();
        parse.record_prefix = "#### ".to_string();
        parse.contributions_end = ContributionsEnd::EndOfBlock;

        let options = parse.options_with(RecordRules::resume());
        assert_eq!(options.marker, "## Projects");
        assert_eq!(options.rules.record_prefix, "#### ");
        assert_eq!(options.rules.contributions_end, ContributionsEnd::EndOfBlock);
        assert_eq!(options.rules.labels, RecordRules::resume().labels);
    }
}
