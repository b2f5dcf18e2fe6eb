//! Page routing under the site base path and viewport selection.
//!
//! The site serves three pages below `/portfolio`. Anything else, including
//! the bare base path, redirects to the résumé.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Base path the site is mounted under.
pub const DEFAULT_BASE_PATH: &str = "/portfolio";

/// User-agent fragments that select the mobile layout.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static MOBILE_UA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Mobi|Android|iPhone").unwrap());

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    /// Résumé with the project list
    Resume,
    /// Web3 showcase, optionally a named section and entry
    Web3 {
        /// Section name, e.g. `research`
        section: Option<String>,
        /// Entry within the section
        slug: Option<String>,
    },
    /// Photography gallery
    Photographer,
}

impl Route {
    /// Path of this route below `base`.
    ///
    /// ```rust
    /// use folio_core::route::Route;
    ///
    /// let route = Route::Web3 { section: Some("blog".into()), slug: None };
    /// assert_eq!(route.path("/portfolio/"), "/portfolio/web3/blog");
    /// ```
    #[must_use]
    pub fn path(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Self::Resume => format!("{base}/resume"),
            Self::Photographer => format!("{base}/photographer"),
            Self::Web3 { section, slug } => {
                let mut path = format!("{base}/web3");
                for part in [section, slug].into_iter().flatten() {
                    path.push('/');
                    path.push_str(part);
                }
                path
            },
        }
    }

    /// Navbar label of the page this route belongs to.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Web3 { .. } => "Web3",
            Self::Photographer => "Photographer",
        }
    }

    /// Whether two routes render the same page, ignoring section and slug.
    #[must_use]
    pub const fn same_page(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Resume, Self::Resume)
                | (Self::Web3 { .. }, Self::Web3 { .. })
                | (Self::Photographer, Self::Photographer)
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path(DEFAULT_BASE_PATH))
    }
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Page to render
    pub route: Route,
    /// True when `path` was not a known page and the résumé was substituted
    pub redirected: bool,
}

/// Resolve `path` against the site mounted at `base`.
///
/// Query strings and fragments are ignored, as are empty segments, so
/// `/portfolio//web3/` matches the showcase.
#[must_use]
pub fn resolve_route(base: &str, path: &str) -> RouteMatch {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let base = base.trim_matches('/');

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let mounted = base
        .split('/')
        .filter(|s| !s.is_empty())
        .all(|expected| segments.next() == Some(expected));
    let rest: Vec<&str> = segments.collect();

    let route = if mounted {
        match rest.as_slice() {
            ["resume"] => Some(Route::Resume),
            ["photographer"] => Some(Route::Photographer),
            ["web3", tail @ ..] if tail.len() <= 2 => Some(Route::Web3 {
                section: tail.first().map(ToString::to_string),
                slug: tail.get(1).map(ToString::to_string),
            }),
            _ => None,
        }
    } else {
        None
    };

    match route {
        Some(route) => RouteMatch {
            route,
            redirected: false,
        },
        None => {
            tracing::debug!(path, "unknown route, redirecting to resume");
            RouteMatch {
                route: Route::Resume,
                redirected: true,
            }
        },
    }
}

/// Layout variant chosen from the client.
///
/// Both layouts render the same records; only the card arrangement differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    #[allow(missing_docs)]
    #[default]
    Desktop,
    #[allow(missing_docs)]
    Mobile,
}

impl Viewport {
    /// Detect the viewport from a `User-Agent` header value.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        if MOBILE_UA_RE.is_match(user_agent) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// One navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display text
    pub label: &'static str,
    /// Target path
    pub href: String,
    /// Whether this entry is the current page
    pub active: bool,
}

/// The three navbar entries, flagging the one for `current`.
#[must_use]
pub fn nav_links(base: &str, current: &Route) -> Vec<NavLink> {
    [
        Route::Resume,
        Route::Web3 {
            section: None,
            slug: None,
        },
        Route::Photographer,
    ]
    .into_iter()
    .map(|route| NavLink {
        label: route.label(),
        href: route.path(base),
        active: route.same_page(current),
    })
    .collect()
}
