//! Photography gallery index (`photo/PhotoName.json`).
//!
//! The index maps a folder key to the ordered file names inside
//! `photo/<folder>/`. The page has three tabs; the gallery tab is further
//! split into sub-tabs, each backed by one folder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Folder holding the featured selection.
pub const FEATURED_FOLDER: &str = "featured";
/// Portrait shown on the about tab, relative to the site base.
pub const PORTRAIT_FILE: &str = "head_photographer.jpg";

/// Folder key → file names, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryMap(BTreeMap<String, Vec<String>>);

impl GalleryMap {
    /// Files for an arbitrary folder key; empty when absent.
    #[must_use]
    pub fn folder(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Files on the featured tab.
    #[must_use]
    pub fn featured(&self) -> &[String] {
        self.folder(FEATURED_FOLDER)
    }

    /// Files for a gallery sub-tab.
    #[must_use]
    pub fn list(&self, subtab: SubTab) -> &[String] {
        self.folder(subtab.folder())
    }

    /// Folder keys present in the index.
    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether the index has no folders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for GalleryMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Top-level tabs of the photography page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryTab {
    /// Curated selection
    #[default]
    Featured,
    /// Browsable folders
    Gallery,
    /// Portrait and bio
    About,
}

impl GalleryTab {
    /// Tabs in navbar order.
    pub const ALL: [Self; 3] = [Self::Featured, Self::Gallery, Self::About];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Gallery => "Gallery",
            Self::About => "About",
        }
    }
}

/// Sub-tabs of the gallery tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTab {
    #[allow(missing_docs)]
    #[default]
    Models,
    #[allow(missing_docs)]
    Girls,
    #[allow(missing_docs)]
    Sapphic,
}

impl SubTab {
    /// Sub-tabs in display order.
    pub const ALL: [Self; 3] = [Self::Models, Self::Girls, Self::Sapphic];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Models => "Models",
            Self::Girls => "Girls",
            Self::Sapphic => "Sapphic",
        }
    }

    /// Folder key in the index and under `photo/`.
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Models => "model",
            Self::Girls => "girls",
            Self::Sapphic => "lesbian",
        }
    }
}

/// Error for an unrecognised tab name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}'", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for GalleryTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl FromStr for SubTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s) || tab.folder().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// URL of `file` inside `photo/<folder>/` under the site base.
///
/// ```rust
/// use folio_core::gallery::image_url;
///
/// assert_eq!(image_url("/portfolio/", "model", "a.jpg"), "/portfolio/photo/model/a.jpg");
/// ```
#[must_use]
pub fn image_url(base: &str, folder: &str, file: &str) -> String {
    format!("{}photo/{folder}/{file}", with_trailing_slash(base))
}

/// URL of the about-tab portrait.
#[must_use]
pub fn portrait_url(base: &str) -> String {
    format!("{}{PORTRAIT_FILE}", with_trailing_slash(base))
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}
