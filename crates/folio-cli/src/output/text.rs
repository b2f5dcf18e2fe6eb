//! Text output formatting

use colored::Colorize;
use folio_core::web3::{SectionPage, resolve_href};
use folio_core::{NavLink, Record, RecordList, RouteMatch, Sections, Viewport, Web3Data};
use std::fmt::Write as _;

const INDENT: &str = "    ";

/// Preamble and body of a split document, each under a rule.
pub fn render_sections(sections: &Sections<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "── preamble ──".bright_black());
    out.push_str(sections.preamble.trim_end());
    out.push('\n');
    let _ = writeln!(out, "{}", "── body ──".bright_black());
    if sections.found {
        out.push_str(sections.body.trim_end());
        out.push('\n');
    } else {
        let _ = writeln!(out, "{}", "(no section marker found)".dimmed());
    }
    out
}

/// One record card. Collapsed cards show the summary only.
pub fn render_record(record: &Record) -> String {
    let mut out = String::new();
    let marker = if record.expanded { "▾" } else { "▸" };
    let id = format!("[{}]", record.id);
    let _ = write!(out, "{marker} {} {}", id.bright_black(), record.title.bold());
    if record.has_link() {
        let _ = write!(out, "  {}", record.link.cyan());
    }
    out.push('\n');

    let meta: Vec<&str> = [record.date.as_str(), record.kind.as_str(), record.read.as_str()]
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect();
    if !meta.is_empty() {
        let _ = writeln!(out, "{INDENT}{}", meta.join(" · ").bright_black());
    }
    if !record.tags.is_empty() {
        let tags: Vec<String> = record.tags.iter().map(|tag| format!("#{tag}")).collect();
        let _ = writeln!(out, "{INDENT}{}", tags.join(" ").green());
    }
    if !record.description.is_empty() {
        let _ = writeln!(out, "{INDENT}{}", record.description);
    }

    if record.expanded {
        if !record.contributions.is_empty() {
            let _ = writeln!(out, "{INDENT}{}", "Key contributions".yellow());
            for line in record.contributions.lines() {
                let _ = writeln!(out, "{INDENT}  {line}");
            }
        }
        if !record.images.is_empty() {
            let _ = writeln!(out, "{INDENT}{} {}", "Images:".yellow(), record.images.join(", "));
        }
    }
    out
}

/// All records in a list, separated by blank lines.
pub fn render_records(list: &RecordList) -> String {
    if list.records().is_empty() {
        return format!("{}\n", "No records found".dimmed());
    }
    list.records()
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The résumé page: preamble prose then the project cards.
pub fn render_resume(preamble: &str, list: &RecordList, viewport: Viewport) -> String {
    let mut out = String::new();
    if !preamble.trim().is_empty() {
        out.push_str(preamble.trim_end());
        out.push_str("\n\n");
    }
    let layout = match viewport {
        Viewport::Desktop => "desktop",
        Viewport::Mobile => "mobile",
    };
    let _ = writeln!(
        out,
        "{} {}",
        "Projects".bold().underline(),
        format!("({} · {layout})", list.records().len()).bright_black()
    );
    out.push_str(&render_records(list));
    out
}

/// Showcase landing page.
pub fn render_web3(data: &Web3Data, base: &str) -> String {
    let mut out = String::new();
    let profile = &data.profile;
    let _ = writeln!(out, "{}", profile.name.bold());
    if !profile.title.is_empty() {
        let _ = writeln!(out, "{}", profile.title);
    }
    if !profile.tagline.is_empty() {
        let _ = writeln!(out, "{}", profile.tagline.bright_black());
    }

    let nav: Vec<String> = data
        .nav_items()
        .into_iter()
        .map(|item| format!("{} → {}", item.label, resolve_href(base, &item.href)))
        .collect();
    if !nav.is_empty() {
        let _ = writeln!(out, "\n{}", "Navigation".underline());
        for entry in nav {
            let _ = writeln!(out, "{INDENT}{entry}");
        }
    }

    if !data.stats.is_empty() {
        let _ = writeln!(out, "\n{}", "Stats".underline());
        for stat in &data.stats {
            let _ = writeln!(out, "{INDENT}{}: {}", stat.label, stat.value.bold());
        }
    }

    if !data.projects.is_empty() {
        let _ = writeln!(out, "\n{}", "Projects".underline());
        for project in &data.projects {
            let kind = format!("[{}]", project.kind);
            let _ = writeln!(out, "{INDENT}{} {}", project.title.bold(), kind.bright_black());
            if !project.summary.is_empty() {
                let _ = writeln!(out, "{INDENT}  {}", project.summary);
            }
            if !project.tags.is_empty() {
                let _ = writeln!(out, "{INDENT}  {}", project.tags.join(", ").green());
            }
        }
    }

    if !data.posts.is_empty() {
        let _ = writeln!(out, "\n{}", "Writing".underline());
        for post in &data.posts {
            let when = format!("{} · {}", post.date, post.read);
            let _ = writeln!(out, "{INDENT}{}  {}", post.title, when.bright_black());
        }
    }

    let newsletter = &data.newsletter;
    if !newsletter.title.is_empty() {
        let _ = writeln!(out, "\n{}", newsletter.title.underline());
        let _ = writeln!(out, "{INDENT}{}", newsletter.body);
        let _ = writeln!(
            out,
            "{INDENT}[{}] {}",
            newsletter.cta.cyan(),
            newsletter.hint.bright_black()
        );
    }

    if !data.socials.is_empty() {
        let _ = writeln!(out, "\n{}", data.socials.join(" · ").bright_black());
    }
    out
}

/// A showcase section page.
pub fn render_section_page(page: &SectionPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.badge_label().to_uppercase().bright_black());
    let _ = writeln!(out, "{}", page.title.bold());
    if !page.summary.is_empty() {
        let _ = writeln!(out, "{}", page.summary);
    }
    for item in &page.items {
        let _ = writeln!(out);
        let detail: Vec<&str> = [item.meta.as_str(), item.read.as_str()]
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect();
        let detail = detail.join(" · ");
        let _ = writeln!(out, "{INDENT}{} {}", item.title.bold(), detail.bright_black());
        if !item.body.is_empty() {
            let _ = writeln!(out, "{INDENT}  {}", item.body);
        }
    }
    out
}

/// Image URLs under a heading.
pub fn render_images(heading: &str, urls: &[String]) -> String {
    let mut out = format!("{}\n", heading.bold());
    if urls.is_empty() {
        let _ = writeln!(out, "{INDENT}{}", "(no images)".dimmed());
    }
    for url in urls {
        let _ = writeln!(out, "{INDENT}{url}");
    }
    out
}

/// Resolved route, viewport, and the navbar.
pub fn render_route(
    matched: &RouteMatch,
    path: &str,
    viewport: Viewport,
    nav: &[NavLink],
) -> String {
    let mut out = String::new();
    let _ = write!(out, "{} → {}", path, matched.route.label().bold());
    if matched.redirected {
        let _ = write!(out, " {}", "(redirected)".yellow());
    }
    out.push('\n');
    if let folio_core::Route::Web3 { section, slug } = &matched.route {
        if let Some(section) = section {
            let _ = writeln!(out, "{INDENT}section: {section}");
        }
        if let Some(slug) = slug {
            let _ = writeln!(out, "{INDENT}slug: {slug}");
        }
    }
    let _ = writeln!(out, "{INDENT}viewport: {viewport:?}");
    let links: Vec<String> = nav
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label).bold().to_string()
            } else {
                link.label.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{INDENT}nav: {}", links.join("  "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ParseOptions, SplitMode, parse_document, split_sections};

    const DOC: &str = "# Max\n\n## Projects\n### [ProofKit](https://x.dev)\n**Date:** 2025\n**Tags:** ZK\n**Key Contributions:**\nBuilt it.\n**Images:** a.png\n";

    fn list() -> RecordList {
        RecordList::new(parse_document(DOC, &ParseOptions::default()).records)
    }

    #[test]
    fn test_collapsed_record_hides_contributions() {
        let out = render_records(&list());
        assert!(out.contains("ProofKit"));
        assert!(out.contains("https://x.dev"));
        assert!(out.contains("#ZK"));
        assert!(!out.contains("Built it."));
    }

    #[test]
    fn test_expanded_record_shows_details() {
        let mut list = list();
        list.toggle_all();
        let out = render_records(&list);
        assert!(out.contains("Built it."));
        assert!(out.contains("a.png"));
    }

    #[test]
    fn test_resume_includes_preamble() {
        let out = render_resume("# Max\n", &list(), Viewport::Mobile);
        assert!(out.starts_with("# Max"));
        assert!(out.contains("mobile"));
    }

    #[test]
    fn test_sections_with_empty_body_are_not_reported_missing() {
        let found = split_sections("# Max\n## Projects", "## Projects", SplitMode::Exclusive);
        assert!(!render_sections(&found).contains("no section marker found"));

        let missing = split_sections("# Max\n", "## Projects", SplitMode::Exclusive);
        assert!(render_sections(&missing).contains("no section marker found"));
    }

    #[test]
    fn test_empty_list_message() {
        assert!(render_records(&RecordList::default()).contains("No records found"));
    }

    #[test]
    fn test_web3_fallback_renders() {
        let out = render_web3(&Web3Data::fallback(), "/portfolio/");
        assert!(out.contains("Max Zhang"));
        assert!(out.contains("ProofKit"));
        assert!(out.contains("Subscribe"));
    }
}
