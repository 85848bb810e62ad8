//! Card styles and the `(content type, style)` renderer registry.
//!
//! Each layout asks the registry for a renderer per item. The registry is a
//! static table with exactly one [`CardStyle::Default`] entry per content type.
//! Asking for a style a type does not register is not an error: the lookup
//! falls back to that type's default entry.
//!
//! ```text
//! resolve_card(Weapons, Detailed)  → detailed weapon card
//! resolve_card(Faq, Overlay)       → default FAQ card (overlay not registered)
//! ```
//!
//! The renderers here are intentionally plain. They emit semantic markup with
//! `card card--{style}` classes and leave the look to the stylesheet.

use crate::content::{ContentItem, ContentType};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named visual variant for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStyle {
    #[default]
    Default,
    Compact,
    Featured,
    Overlay,
    Minimal,
    Detailed,
    Immersive,
    Hero,
}

impl CardStyle {
    pub const ALL: [CardStyle; 8] = [
        CardStyle::Default,
        CardStyle::Compact,
        CardStyle::Featured,
        CardStyle::Overlay,
        CardStyle::Minimal,
        CardStyle::Detailed,
        CardStyle::Immersive,
        CardStyle::Hero,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Resolve a persisted style name. Absent or unknown names become
    /// [`CardStyle::Default`].
    pub fn from_requested(name: Option<&str>) -> Self {
        match name {
            None => CardStyle::Default,
            Some(n) => Self::parse(n).unwrap_or_else(|| {
                tracing::debug!(card_style = n, "unknown card style, using default");
                CardStyle::Default
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardStyle::Default => "default",
            CardStyle::Compact => "compact",
            CardStyle::Featured => "featured",
            CardStyle::Overlay => "overlay",
            CardStyle::Minimal => "minimal",
            CardStyle::Detailed => "detailed",
            CardStyle::Immersive => "immersive",
            CardStyle::Hero => "hero",
        }
    }

    /// Immersive styles turn a carousel into the hero banner.
    pub fn is_immersive(self) -> bool {
        matches!(self, CardStyle::Immersive | CardStyle::Hero)
    }
}

impl fmt::Display for CardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type CardFn = fn(&ContentItem) -> Markup;

/// One registry entry: how to draw a `kind` item in `style`.
pub struct CardRenderer {
    pub kind: ContentType,
    pub style: CardStyle,
    render: CardFn,
}

impl CardRenderer {
    pub fn render(&self, item: &ContentItem) -> Markup {
        (self.render)(item)
    }
}

impl fmt::Debug for CardRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRenderer")
            .field("kind", &self.kind)
            .field("style", &self.style)
            .finish()
    }
}

macro_rules! card {
    ($kind:ident, $style:ident, $render:path) => {
        CardRenderer {
            kind: ContentType::$kind,
            style: CardStyle::$style,
            render: $render,
        }
    };
}

static REGISTRY: &[CardRenderer] = &[
    card!(News, Default, render_default),
    card!(News, Compact, render_compact),
    card!(News, Featured, render_featured),
    card!(News, Overlay, render_overlay),
    card!(News, Minimal, render_minimal),
    card!(News, Immersive, render_immersive),
    card!(Classes, Default, render_default),
    card!(Classes, Compact, render_compact),
    card!(Classes, Overlay, render_overlay),
    card!(Classes, Detailed, render_detailed),
    card!(Classes, Immersive, render_immersive),
    card!(Features, Default, render_default),
    card!(Features, Compact, render_compact),
    card!(Features, Minimal, render_minimal),
    card!(Features, Overlay, render_overlay),
    card!(Media, Default, render_default),
    card!(Media, Overlay, render_overlay),
    card!(Media, Immersive, render_immersive),
    card!(Weapons, Default, render_default),
    card!(Weapons, Compact, render_compact),
    card!(Weapons, Detailed, render_detailed),
    card!(Weapons, Overlay, render_overlay),
    card!(Devices, Default, render_default),
    card!(Devices, Compact, render_compact),
    card!(Maps, Default, render_default),
    card!(Maps, Featured, render_featured),
    card!(Maps, Overlay, render_overlay),
    card!(Maps, Immersive, render_immersive),
    card!(Faq, Default, render_faq),
    card!(Faq, Compact, render_compact),
    card!(GameModes, Default, render_default),
    card!(GameModes, Compact, render_compact),
    card!(GameModes, Overlay, render_overlay),
    card!(GameModes, Immersive, render_immersive),
    card!(Roadmap, Default, render_roadmap),
    card!(Roadmap, Compact, render_compact),
];

/// Look up the renderer for `(kind, style)`, falling back to the type default.
///
/// Every content type registers exactly one `Default` entry, so the fallback
/// always finds a renderer.
pub fn resolve_card(kind: ContentType, style: CardStyle) -> &'static CardRenderer {
    REGISTRY
        .iter()
        .find(|e| e.kind == kind && e.style == style)
        .or_else(|| {
            REGISTRY
                .iter()
                .find(|e| e.kind == kind && e.style == CardStyle::Default)
        })
        .expect("every content type registers a default card")
}

/// Whether `(kind, style)` has its own entry (no fallback needed).
pub fn is_registered(kind: ContentType, style: CardStyle) -> bool {
    REGISTRY.iter().any(|e| e.kind == kind && e.style == style)
}

/// Styles registered for one content type, in table order.
pub fn registered_styles(kind: ContentType) -> Vec<CardStyle> {
    REGISTRY
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.style)
        .collect()
}

/// Render `item` in `style` through the registry.
pub fn render_card(item: &ContentItem, style: CardStyle) -> Markup {
    resolve_card(item.content_type(), style).render(item)
}

// ============================================================================
// Renderers
// ============================================================================

fn card_image(item: &ContentItem) -> Markup {
    html! {
        @if let Some(src) = item.image() {
            img.card-image src=(src) alt=(item.label()) loading="lazy";
        }
    }
}

fn render_default(item: &ContentItem) -> Markup {
    html! {
        article.card."card--default" data-id=(item.id()) {
            (card_image(item))
            div.card-body {
                h3.card-title { (item.label()) }
                @if let Some(meta) = item.meta() {
                    p.card-meta { (meta) }
                }
                @if let Some(desc) = item.description() {
                    p.card-description { (desc) }
                }
            }
        }
    }
}

fn render_compact(item: &ContentItem) -> Markup {
    html! {
        article.card."card--compact" data-id=(item.id()) {
            @if let Some(src) = item.image() {
                img.card-thumb src=(src) alt=(item.label()) loading="lazy";
            }
            div.card-body {
                h4.card-title { (item.label()) }
                @if let Some(meta) = item.meta() {
                    p.card-meta { (meta) }
                }
            }
        }
    }
}

fn render_featured(item: &ContentItem) -> Markup {
    html! {
        article.card."card--featured" data-id=(item.id()) {
            (card_image(item))
            div.card-body {
                @if let Some(meta) = item.meta() {
                    p.card-meta { (meta) }
                }
                h2.card-title { (item.label()) }
                @if let Some(desc) = item.description() {
                    p.card-description { (desc) }
                }
            }
        }
    }
}

fn render_overlay(item: &ContentItem) -> Markup {
    html! {
        article.card."card--overlay" data-id=(item.id()) {
            (card_image(item))
            div.card-overlay {
                h3.card-title { (item.label()) }
                @if let Some(meta) = item.meta() {
                    p.card-meta { (meta) }
                }
            }
        }
    }
}

fn render_minimal(item: &ContentItem) -> Markup {
    html! {
        article.card."card--minimal" data-id=(item.id()) {
            h3.card-title { (item.label()) }
            @if let Some(desc) = item.description() {
                p.card-description { (desc) }
            }
        }
    }
}

fn render_detailed(item: &ContentItem) -> Markup {
    let stats = item.stats();
    html! {
        article.card."card--detailed" data-id=(item.id()) {
            (card_image(item))
            div.card-body {
                h3.card-title { (item.label()) }
                @if let Some(meta) = item.meta() {
                    p.card-meta { (meta) }
                }
                @if let Some(desc) = item.description() {
                    p.card-description { (desc) }
                }
                @if !stats.is_empty() {
                    dl.card-stats {
                        @for stat in &stats {
                            dt { (stat.label) }
                            dd style={ "--stat: " (stat.value.min(100)) "%" } { (stat.value) }
                        }
                    }
                }
            }
        }
    }
}

fn render_immersive(item: &ContentItem) -> Markup {
    html! {
        article.card."card--immersive" data-id=(item.id()) {
            (card_image(item))
            div.card-overlay {
                @if let Some(meta) = item.meta() {
                    p.card-meta { (meta) }
                }
                h2.card-title { (item.label()) }
                @if let Some(desc) = item.description() {
                    p.card-description { (desc) }
                }
            }
        }
    }
}

fn render_faq(item: &ContentItem) -> Markup {
    html! {
        article.card."card--faq" data-id=(item.id()) {
            h3.card-title { (item.label()) }
            @if let Some(answer) = item.description() {
                p.card-description { (answer) }
            }
        }
    }
}

fn render_roadmap(item: &ContentItem) -> Markup {
    html! {
        article.card."card--roadmap" data-id=(item.id()) {
            @if let Some(meta) = item.meta() {
                span.card-badge { (meta) }
            }
            h3.card-title { (item.label()) }
            @if let Some(desc) = item.description() {
                p.card-description { (desc) }
            }
        }
    }
}
