//! HTML page generation.
//!
//! The static rendering surface. Every configured section is composed
//! (resolve → dispatch → cards) and drawn into a single `index.html`.
//!
//! ## Page Structure
//!
//! ```text
//! <main class="showcase">
//!   <section id="{section.id}" class="showcase-section">
//!     <header>  title / subtitle / markdown intro  </header>
//!     <div class="layout layout--{name}"> ... </div>   one per source
//!   </section>
//!   ...
//! </main>
//! ```
//!
//! Sources that resolve to nothing draw nothing: no empty wrapper, no
//! placeholder. A section whose sources are all empty still draws its heading.
//!
//! ## Carousels
//!
//! Hero carousels draw every slide. Slides in the initial window (index 0)
//! carry `data-position` and `data-action` (`view` for the center, `prev` /
//! `next` for the sides); the rest are `hidden`. The autoplay interval travels
//! as `data-autoplay-ms`. Scroll carousels carry their step ratio and edge
//! threshold as data attributes.
//!
//! `static/carousel.js` drives both on the published page from those
//! attributes. `static/style.css` holds the base styles; colors and spacing
//! are injected from config as CSS custom properties.

use crate::cards::render_card;
use crate::carousel::{HeroCarousel, SlotPosition};
use crate::config::{self, CarouselConfig, ConfigError, SectionConfig, SiteConfig};
use crate::content::{Catalog, ContentError, ContentStore};
use crate::layout::{AccordionEntry, DisplayMode, LayoutInstruction, PlacedCard, dispatch};
use crate::source::{SourceDescriptor, resolve};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/carousel.js");

// ============================================================================
// Composition
// ============================================================================

/// One source after resolution and dispatch.
#[derive(Debug, Clone)]
pub struct ComposedSource {
    pub descriptor: SourceDescriptor,
    pub layout: LayoutInstruction,
}

impl ComposedSource {
    pub fn summary(&self) -> SourceSummary {
        SourceSummary {
            source_type: self.descriptor.source_type.clone(),
            display_mode: self.descriptor.display_mode,
            layout: self.layout.name(),
            items: self.layout.len(),
            view_all: matches!(
                self.layout,
                LayoutInstruction::Spotlight { view_all: true, .. }
            ),
        }
    }
}

/// One section with its sources composed, in config order.
#[derive(Debug, Clone)]
pub struct ComposedSection<'a> {
    pub section: &'a SectionConfig,
    pub sources: Vec<ComposedSource>,
}

/// Resolve and dispatch every source of every section.
pub fn compose<'a>(config: &'a SiteConfig, store: &dyn ContentStore) -> Vec<ComposedSection<'a>> {
    let options = config.layout.options();
    config
        .sections
        .iter()
        .map(|section| {
            let sources = section
                .sources
                .iter()
                .map(|descriptor| {
                    let set = resolve(descriptor, store);
                    let layout = dispatch(descriptor.display_mode, &set, descriptor, &options);
                    ComposedSource {
                        descriptor: descriptor.clone(),
                        layout,
                    }
                })
                .collect();
            ComposedSection { section, sources }
        })
        .collect()
}

/// What one source ended up showing.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSummary {
    pub source_type: String,
    pub display_mode: DisplayMode,
    /// Layout actually chosen, e.g. `"hero carousel"` or `"empty"`.
    pub layout: &'static str,
    pub items: usize,
    pub view_all: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    pub id: String,
    pub title: Option<String>,
    pub sources: Vec<SourceSummary>,
}

impl SectionSummary {
    pub fn item_count(&self) -> usize {
        self.sources.iter().map(|s| s.items).sum()
    }
}

/// Result of a full [`generate`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub sections: Vec<SectionSummary>,
}

impl GenerateSummary {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(SectionSummary::item_count).sum()
    }
}

pub fn summarize(composed: &[ComposedSection<'_>]) -> Vec<SectionSummary> {
    composed
        .iter()
        .map(|c| SectionSummary {
            id: c.section.id.clone(),
            title: c.section.title.clone(),
            sources: c
                .sources
                .iter()
                .map(ComposedSource::summary)
                .collect(),
        })
        .collect()
}

/// Load config and content, render the page and write `index.html`.
pub fn generate(
    config_path: &Path,
    content_path: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let config = config::load_config(config_path)?;
    let catalog = Catalog::load(content_path)?;

    let composed = compose(&config, &catalog);
    let page = render_composed(&config, &composed);

    fs::create_dir_all(output_dir)?;
    let output = output_dir.join("index.html");
    fs::write(&output, page.into_string())?;
    tracing::info!(path = %output.display(), "wrote page");

    Ok(GenerateSummary {
        output,
        sections: summarize(&composed),
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

fn page_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Renders one section band: heading plus every non-empty source.
fn render_section(composed: &ComposedSection<'_>, carousel: &CarouselConfig) -> Markup {
    let section = composed.section;
    let style = section
        .background
        .as_deref()
        .map(|bg| format!("background: {bg}"));
    let has_heading =
        section.title.is_some() || section.subtitle.is_some() || section.intro.is_some();

    tracing::info!(
        section = %section.id,
        sources = composed.sources.len(),
        items = composed.sources.iter().map(|s| s.layout.len()).sum::<usize>(),
        "rendered section"
    );

    html! {
        section.showcase-section id=(section.id) style=[style] {
            div.section-inner {
                @if has_heading {
                    header.section-header {
                        @if let Some(title) = &section.title {
                            h2.section-title { (title) }
                        }
                        @if let Some(subtitle) = &section.subtitle {
                            p.section-subtitle { (subtitle) }
                        }
                        @if let Some(intro) = &section.intro {
                            div.section-intro { (markdown(intro)) }
                        }
                    }
                }
                @for (index, source) in composed.sources.iter().enumerate() {
                    @let key = format!("{}-{}", section.id, index);
                    (render_layout(&source.layout, &key, carousel))
                }
            }
        }
    }
}

/// Renders one layout instruction. `key` is unique per source on the page.
pub fn render_layout(layout: &LayoutInstruction, key: &str, carousel: &CarouselConfig) -> Markup {
    match layout {
        LayoutInstruction::Empty => html! {},
        LayoutInstruction::Grid { columns, cards } => html! {
            div.layout."layout--grid" style={ "--columns: " (columns) } {
                @for card in cards { (render_cell(card)) }
            }
        },
        LayoutInstruction::List { cards } => html! {
            div.layout."layout--list" {
                @for card in cards { (render_card(&card.item, card.style)) }
            }
        },
        LayoutInstruction::Masonry { columns, cards } => html! {
            div.layout."layout--masonry" style={ "--columns: " (columns) } {
                @for card in cards { (render_card(&card.item, card.style)) }
            }
        },
        LayoutInstruction::Featured { columns, cards } => html! {
            div.layout."layout--featured" style={ "--columns: " (columns) } {
                @for card in cards { (render_cell(card)) }
            }
        },
        LayoutInstruction::Spotlight {
            lead,
            side,
            view_all,
        } => html! {
            div.layout."layout--spotlight" {
                div.spotlight-lead { (render_card(&lead.item, lead.style)) }
                @if !side.is_empty() {
                    div.spotlight-side {
                        @for card in side { (render_card(&card.item, card.style)) }
                    }
                }
                @if *view_all {
                    button.view-all type="button" data-action="view-all" data-source=(key) {
                        "View all"
                    }
                }
            }
        },
        LayoutInstruction::Accordion { entries } => render_accordion(entries, key),
        LayoutInstruction::ScrollCarousel { cards } => render_scroll_carousel(cards, carousel),
        LayoutInstruction::HeroCarousel { cards } => render_hero_carousel(cards, carousel),
    }
}

/// Grid cell honoring the card's span.
fn render_cell(card: &PlacedCard) -> Markup {
    let wide = card.span.columns > 1 || card.span.rows > 1;
    let style = wide.then(|| {
        format!(
            "grid-column: span {}; grid-row: span {}",
            card.span.columns, card.span.rows
        )
    });
    html! {
        div.cell."cell--wide"[wide] style=[style] {
            (render_card(&card.item, card.style))
        }
    }
}

/// `<details>` entries sharing one `name`, so opening one closes the others.
fn render_accordion(entries: &[AccordionEntry], key: &str) -> Markup {
    html! {
        div.layout."layout--accordion" {
            @for entry in entries {
                details.accordion-entry name=(key) data-id=(entry.item.id()) {
                    summary.accordion-question { (entry.question) }
                    @if let Some(answer) = &entry.answer {
                        div.accordion-answer { p { (answer) } }
                    }
                }
            }
        }
    }
}

fn render_scroll_carousel(cards: &[PlacedCard], carousel: &CarouselConfig) -> Markup {
    let engine = carousel.scroll_engine();
    html! {
        div.layout."layout--carousel".scroll-carousel
            data-step=(engine.step_ratio)
            data-edge-threshold=(engine.edge_threshold) {
            button.scroll-nav."scroll-nav--left" type="button" data-direction="left"
                aria-label="Scroll left" hidden { "‹" }
            div.scroll-track {
                @for card in cards {
                    div.scroll-item { (render_card(&card.item, card.style)) }
                }
            }
            button.scroll-nav."scroll-nav--right" type="button" data-direction="right"
                aria-label="Scroll right" { "›" }
            div.scroll-progress {
                div.scroll-progress-bar style="width: 0%" {}
            }
        }
    }
}

/// `data-action` for a slot: the center opens, sides move.
fn slot_action(position: SlotPosition) -> &'static str {
    match position.offset() {
        0 => "view",
        offset if offset < 0 => "prev",
        _ => "next",
    }
}

fn render_hero_carousel(cards: &[PlacedCard], carousel: &CarouselConfig) -> Markup {
    let current = 0;
    let window = HeroCarousel::window_at(cards.len(), current);
    let offsets = window
        .iter()
        .map(|slot| slot.position.offset().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let positions: HashMap<usize, SlotPosition> = window
        .into_iter()
        .map(|slot| (slot.source_index, slot.position))
        .collect();

    html! {
        div.layout."layout--hero".hero-carousel
            data-autoplay-ms=(carousel.autoplay_ms)
            data-current=(current)
            data-offsets=(offsets) {
            div.hero-track {
                @for (index, card) in cards.iter().enumerate() {
                    @match positions.get(&index) {
                        Some(position) => {
                            div.hero-slide
                                data-index=(index)
                                data-position=(position.name())
                                data-action=(slot_action(*position)) {
                                (render_card(&card.item, card.style))
                            }
                        }
                        None => {
                            div.hero-slide data-index=(index) hidden {
                                (render_card(&card.item, card.style))
                            }
                        }
                    }
                }
            }
            @if cards.len() > 1 {
                div.hero-dots {
                    @for index in 0..cards.len() {
                        button.hero-dot.active[index == current] type="button"
                            data-index=(index)
                            aria-label={ "Go to slide " (index + 1) } {}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_composed(config: &SiteConfig, composed: &[ComposedSection<'_>]) -> Markup {
    let css = page_css(config);
    let content = html! {
        main.showcase {
            @for section in composed {
                (render_section(section, &config.carousel))
            }
        }
    };
    base_document(&config.title, &css, content)
}

/// Renders the full page for `config` over `store`.
pub fn render_page(config: &SiteConfig, store: &dyn ContentStore) -> Markup {
    let composed = compose(config, store);
    render_composed(config, &composed)
}

// ============================================================================
// Tests
// ============================================================================
