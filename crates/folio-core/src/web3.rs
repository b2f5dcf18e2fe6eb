//! Web3 showcase content (`web3/web3-data.json`).
//!
//! Every field is optional in the JSON; missing pieces deserialize to empty
//! values so a partial file still renders. When the file cannot be fetched at
//! all the page shows [`Web3Data::fallback`].

use crate::record::{NO_LINK, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Badge shown on a section page that does not declare one.
pub const DEFAULT_SECTION_BADGE: &str = "Web3 entry";

/// Root of `web3-data.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web3Data {
    /// Header identity
    pub profile: Profile,
    /// Navigation entries, as bare labels or `{label, href}` objects
    pub nav: Vec<NavEntry>,
    /// Headline numbers
    pub stats: Vec<Stat>,
    /// Featured projects
    pub projects: Vec<Web3Project>,
    /// Writing
    pub posts: Vec<Post>,
    /// Call-to-action panel
    pub newsletter: Newsletter,
    /// Social link labels
    pub socials: Vec<String>,
    /// Named sub-pages reachable as `/portfolio/web3/<name>`
    pub sections: BTreeMap<String, SectionPage>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
}

/// A navigation entry as written in the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Bare label, links nowhere
    Label(String),
    /// Label with an explicit target
    Link {
        /// Display text
        label: String,
        /// Target, resolved with [`resolve_href`]
        #[serde(default)]
        href: String,
    },
}

/// Normalized navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display text
    pub label: String,
    /// Raw target; `#` when none was given
    pub href: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// A featured project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web3Project {
    /// Card heading
    pub title: String,
    /// Category chip, e.g. "ZK Protocol"
    #[serde(rename = "type")]
    pub kind: String,
    /// One-paragraph pitch
    pub summary: String,
    /// Technology chips
    pub tags: Vec<String>,
    /// Target, `#` when none
    pub link: String,
}

/// A post in the writing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Post title
    pub title: String,
    /// Publication date as displayed
    pub date: String,
    /// Reading time, e.g. "6 min read"
    pub read: String,
    /// Target, `#` when none
    pub link: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Newsletter {
    pub title: String,
    pub body: String,
    pub cta: String,
    pub hint: String,
}

/// A named sub-page of the showcase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionPage {
    /// Small label above the title
    pub badge: Option<String>,
    /// Page heading
    pub title: String,
    /// Lead paragraph
    pub summary: String,
    /// Entries listed on the page
    pub items: Vec<SectionItem>,
}

impl SectionPage {
    /// Badge text, defaulting to [`DEFAULT_SECTION_BADGE`].
    #[must_use]
    pub fn badge_label(&self) -> &str {
        self.badge
            .as_deref()
            .filter(|badge| !badge.is_empty())
            .unwrap_or(DEFAULT_SECTION_BADGE)
    }
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionItem {
    pub title: String,
    pub meta: String,
    pub read: String,
    pub body: String,
}

impl Web3Data {
    /// Built-in content shown when `web3-data.json` cannot be loaded.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            profile: Profile {
                name: "Max Zhang".to_string(),
                title: "Web3 product designer / builder".to_string(),
                tagline: "A calm home for on-chain experiments, shipping notes, and product launches."
                    .to_string(),
            },
            nav: ["About", "Projects", "Blog", "Research", "Contact"]
                .into_iter()
                .map(|label| NavEntry::Label(label.to_string()))
                .collect(),
            stats: vec![
                stat("Chains", "6 live"),
                stat("Experiments", "18 shipped"),
                stat("Collaborations", "9 teams"),
            ],
            projects: vec![Web3Project {
                title: "ProofKit".to_string(),
                kind: "ZK Protocol".to_string(),
                summary: "Privacy-preserving proofs for on-chain identity flows with a clean, auditable API surface."
                    .to_string(),
                tags: vec!["ZK".to_string(), "Circom".to_string(), "Rust".to_string()],
                link: NO_LINK.to_string(),
            }],
            posts: vec![Post {
                title: "Designing trust layers for wallet-first onboarding".to_string(),
                date: "Jan 12, 2026".to_string(),
                read: "6 min read".to_string(),
                link: NO_LINK.to_string(),
            }],
            newsletter: Newsletter {
                title: "Start a conversation".to_string(),
                body: "Weekly notes on product strategy, on-chain UX, and the quiet work behind strong crypto brands."
                    .to_string(),
                cta: "Subscribe".to_string(),
                hint: "No spam. One email per week, always useful.".to_string(),
            },
            socials: vec![
                "Newsletter".to_string(),
                "Farcaster".to_string(),
                "GitHub".to_string(),
            ],
            sections: BTreeMap::new(),
        }
    }

    /// Navigation entries normalized to label + href.
    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.nav
            .iter()
            .map(|entry| match entry {
                NavEntry::Label(label) => NavItem {
                    label: label.clone(),
                    href: NO_LINK.to_string(),
                },
                NavEntry::Link { label, href } => NavItem {
                    label: label.clone(),
                    href: if href.is_empty() {
                        NO_LINK.to_string()
                    } else {
                        href.clone()
                    },
                },
            })
            .collect()
    }

    /// Sub-page named `name`, if the data declares one.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&SectionPage> {
        self.sections.get(name)
    }
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

/// Turn a content href into a link usable from the hash-routed site.
///
/// Empty and `#` stay `#`; absolute `http…` links and in-page `#…` anchors are
/// unchanged; anything else becomes `<base>/#/<path>`.
///
/// ```rust
/// use folio_core::web3::resolve_href;
///
/// assert_eq!(resolve_href("/portfolio", "research"), "/portfolio/#/research");
/// assert_eq!(resolve_href("/portfolio/", "/blog/1"), "/portfolio/#/blog/1");
/// assert_eq!(resolve_href("/portfolio/", "https://x.dev"), "https://x.dev");
/// ```
#[must_use]
pub fn resolve_href(base: &str, href: &str) -> String {
    if href.is_empty() || href == NO_LINK {
        return NO_LINK.to_string();
    }
    if href.starts_with("http") || href.starts_with('#') {
        return href.to_string();
    }

    let base = if base.is_empty() { "/" } else { base };
    let separator = if base.ends_with('/') { "" } else { "/" };
    let path = if href.starts_with('/') {
        href.to_string()
    } else {
        format!("/{href}")
    };
    format!("{base}{separator}#{path}")
}

impl From<&Record> for Web3Project {
    fn from(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            kind: record.kind.clone(),
            summary: record.description.clone(),
            tags: record.tags.clone(),
            link: record.link.clone(),
        }
    }
}

impl From<&Record> for Post {
    fn from(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            date: record.date.clone(),
            read: record.read.clone(),
            link: record.link.clone(),
        }
    }
}
