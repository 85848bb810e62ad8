//! CLI output formatting for `check` and `render`.
//!
//! # Information-First Display
//!
//! Output is organized by section, the way the page reads top to bottom. The
//! primary display for every entity (section, item) is its semantic identity:
//! positional index plus title. Config identifiers (section ids, source types,
//! display modes) appear as secondary context on indented lines.
//!
//! # Entity Display Contract
//!
//! 1. **Header line**: positional index + title (+ item count)
//! 2. **Context lines**: indented source lines, then the items each one shows
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! 001 Latest news (3 items)
//!     news [featured] → featured
//!         001 Season 3
//!         002 Patch 3.1
//!         003 (n7)
//! 002 roadmap (0 items)
//!     vehicles [grid] → empty
//!
//! 2 sections, 3 items
//! ```
//!
//! Untitled items show their id in parentheses: the id is the identity.
//!
//! ## Render
//!
//! ```text
//! 001 Latest news → #news (3 items)
//! 002 roadmap → #roadmap (0 items)
//!
//! Wrote dist/index.html: 2 sections, 3 items
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::generate::{ComposedSection, ComposedSource, GenerateSummary};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "item" } else { "items" }
}

/// Format an entity header: positional index + title + item count.
///
/// ```text
/// 001 Latest news (3 items)
/// ```
fn entity_header(index: usize, title: &str, count: usize) -> String {
    format!("{} {} ({} {})", format_index(index), title, count, plural(count))
}

/// Format an item line: labelled items show the label, unlabelled show the id.
///
/// ```text
/// 001 Season 3
/// 002 (m4)
/// ```
fn item_line(index: usize, label: &str, id: &str) -> String {
    if label.is_empty() {
        format!("{} ({})", format_index(index), id)
    } else {
        format!("{} {}", format_index(index), truncate_label(label, 48))
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}

/// `type [mode] → layout`, with `view all` when the spotlight overflowed.
fn source_line(source_type: &str, mode: &str, layout: &str, view_all: bool) -> String {
    let mut line = format!("{} [{}] \u{2192} {}", source_type, mode, layout);
    if view_all {
        line.push_str(" + view all");
    }
    line
}

fn section_title<'a>(title: Option<&'a str>, id: &'a str) -> &'a str {
    title.filter(|t| !t.is_empty()).unwrap_or(id)
}

fn totals(sections: usize, items: usize) -> String {
    format!(
        "{} {}, {} {}",
        sections,
        if sections == 1 { "section" } else { "sections" },
        items,
        plural(items)
    )
}

// ============================================================================
// Check
// ============================================================================

fn composed_source_lines(source: &ComposedSource, lines: &mut Vec<String>) {
    let summary = source.summary();
    lines.push(format!(
        "{}{}",
        indent(1),
        source_line(
            &summary.source_type,
            summary.display_mode.name(),
            summary.layout,
            summary.view_all
        )
    ));
    for (i, item) in source.layout.items().into_iter().enumerate() {
        lines.push(format!(
            "{}{}",
            indent(2),
            item_line(i + 1, item.label(), item.id())
        ));
    }
}

/// Format what every section would show.
pub fn format_check_output(composed: &[ComposedSection<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut total_items = 0;

    for (i, section) in composed.iter().enumerate() {
        let count: usize = section.sources.iter().map(|s| s.layout.len()).sum();
        total_items += count;
        let title = section_title(section.section.title.as_deref(), &section.section.id);
        lines.push(entity_header(i + 1, title, count));
        for source in &section.sources {
            composed_source_lines(source, &mut lines);
        }
    }

    lines.push(String::new());
    lines.push(totals(composed.len(), total_items));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(composed: &[ComposedSection<'_>]) {
    for line in format_check_output(composed) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

/// Format the result of a `render` run.
pub fn format_render_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, section) in summary.sections.iter().enumerate() {
        let title = section_title(section.title.as_deref(), &section.id);
        let count = section.item_count();
        lines.push(format!(
            "{} {} \u{2192} #{} ({} {})",
            format_index(i + 1),
            title,
            section.id,
            count,
            plural(count)
        ));
        for source in section.sources.iter().filter(|s| s.items == 0) {
            lines.push(format!(
                "{}{} [{}]: nothing to show",
                indent(1),
                source.source_type,
                source.display_mode
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Wrote {}: {}",
        summary.output.display(),
        totals(summary.sections.len(), summary.item_count())
    ));
    lines
}

/// Print render output to stdout.
pub fn print_render_output(summary: &GenerateSummary) {
    for line in format_render_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SectionConfig, SiteConfig};
    use crate::generate::{SectionSummary, SourceSummary, compose};
    use crate::layout::DisplayMode;
    use crate::source::SourceDescriptor;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_single_digit() {
        assert_eq!(format_index(1), "001");
    }

    #[test]
    fn format_index_triple_digit() {
        assert_eq!(format_index(123), "123");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn entity_header_pluralizes() {
        assert_eq!(entity_header(1, "News", 1), "001 News (1 item)");
        assert_eq!(entity_header(2, "Maps", 0), "002 Maps (0 items)");
    }

    #[test]
    fn item_line_labelled() {
        assert_eq!(item_line(1, "Season 3", "n1"), "001 Season 3");
    }

    #[test]
    fn item_line_unlabelled_shows_id() {
        assert_eq!(item_line(4, "", "m4"), "004 (m4)");
    }

    #[test]
    fn truncate_label_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_label(&text, 48), format!("{}...", "a".repeat(48)));
    }

    #[test]
    fn truncate_label_counts_chars() {
        assert_eq!(truncate_label("Éclair", 3), "Écl...");
        assert_eq!(truncate_label("Éclair", 6), "Éclair");
    }

    #[test]
    fn source_line_with_view_all() {
        assert_eq!(
            source_line("news", "spotlight", "spotlight", true),
            "news [spotlight] \u{2192} spotlight + view all"
        );
    }

    #[test]
    fn section_title_falls_back_to_id() {
        assert_eq!(section_title(None, "news"), "news");
        assert_eq!(section_title(Some(""), "news"), "news");
        assert_eq!(section_title(Some("Latest"), "news"), "Latest");
    }

    // =========================================================================
    // Check output
    // =========================================================================

    fn config() -> SiteConfig {
        let mut hero = SourceDescriptor::new("news");
        hero.display_mode = DisplayMode::Carousel;
        hero.card_style = Some("immersive".to_string());
        let mut faq = SourceDescriptor::new("faq");
        faq.display_mode = DisplayMode::Accordion;

        SiteConfig {
            sections: vec![
                SectionConfig {
                    id: "top".to_string(),
                    title: Some("Latest news".to_string()),
                    subtitle: None,
                    intro: None,
                    background: None,
                    sources: vec![hero],
                },
                SectionConfig {
                    id: "help".to_string(),
                    title: None,
                    subtitle: None,
                    intro: None,
                    background: None,
                    sources: vec![faq, SourceDescriptor::new("vehicles")],
                },
            ],
            ..SiteConfig::default()
        }
    }

    #[test]
    fn check_output_lists_sections_sources_and_items() {
        let config = config();
        let store = sample_catalog();
        let lines = format_check_output(&compose(&config, &store));
        assert_eq!(
            lines,
            vec![
                "001 Latest news (2 items)",
                "    news [carousel] \u{2192} hero carousel",
                "        001 Season 3",
                "        002 Patch 3.1",
                "002 help (2 items)",
                "    faq [accordion] \u{2192} accordion",
                "        001 Is it free to play?",
                "        002 Is there cross-play?",
                "    vehicles [grid] \u{2192} empty",
                "",
                "2 sections, 4 items",
            ]
        );
    }

    #[test]
    fn check_output_empty_config() {
        let config = SiteConfig::default();
        let store = sample_catalog();
        let lines = format_check_output(&compose(&config, &store));
        assert_eq!(lines, vec!["", "0 sections, 0 items"]);
    }

    // =========================================================================
    // Render output
    // =========================================================================

    #[test]
    fn render_output_summarizes_sections() {
        let summary = GenerateSummary {
            output: PathBuf::from("dist/index.html"),
            sections: vec![
                SectionSummary {
                    id: "news".to_string(),
                    title: Some("Latest news".to_string()),
                    sources: vec![SourceSummary {
                        source_type: "news".to_string(),
                        display_mode: DisplayMode::Featured,
                        layout: "featured",
                        items: 3,
                        view_all: false,
                    }],
                },
                SectionSummary {
                    id: "misc".to_string(),
                    title: None,
                    sources: vec![SourceSummary {
                        source_type: "vehicles".to_string(),
                        display_mode: DisplayMode::Grid,
                        layout: "empty",
                        items: 0,
                        view_all: false,
                    }],
                },
            ],
        };
        let lines = format_render_output(&summary);
        assert_eq!(
            lines,
            vec![
                "001 Latest news \u{2192} #news (3 items)",
                "002 misc \u{2192} #misc (0 items)",
                "    vehicles [grid]: nothing to show",
                "",
                "Wrote dist/index.html: 2 sections, 3 items",
            ]
        );
    }
}
