//! Resolve a request path to a page

use anyhow::Result;
use folio_core::{Config, NavLink, RouteMatch, Viewport, nav_links, resolve_route};
use serde::Serialize;

use crate::output::{OutputFormat, print_item, text};

#[derive(Debug, Serialize)]
struct RouteView<'a> {
    path: &'a str,
    #[serde(flatten)]
    matched: &'a RouteMatch,
    viewport: Viewport,
    nav: &'a [NavLink],
}

/// Execute the route command
pub fn execute(
    path: &str,
    user_agent: Option<&str>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let base = config.site.base_path();
    let matched = resolve_route(&base, path);
    let viewport = user_agent.map(Viewport::from_user_agent).unwrap_or_default();
    let nav = nav_links(&base, &matched.route);

    match format {
        OutputFormat::Text => print!("{}", text::render_route(&matched, path, viewport, &nav)),
        OutputFormat::Json | OutputFormat::Jsonl => {
            let view = RouteView {
                path,
                matched: &matched,
                viewport,
                nav: &nav,
            };
            print_item(&view, format)?;
        },
    }
    Ok(())
}
