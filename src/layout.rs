//! Display dispatch: resolved items → one layout instruction.
//!
//! [`dispatch`] is a pure function of the display mode, the resolved set and
//! the descriptor. It picks the arrangement and assigns a card style (and cell
//! span) to every item it keeps. Drawing is left to the rendering surface.
//!
//! | Mode | Arrangement | Card styles |
//! |------|-------------|-------------|
//! | `grid` | `grid_columns` columns (1-4, default 3) | requested style |
//! | `cards` | grid with the caller's default column count | requested style |
//! | `list` | single column | requested style, else compact |
//! | `masonry` | CSS columns, packing left to the surface | requested style |
//! | `carousel` | scroll carousel | requested style |
//! | `carousel` + immersive style, `hero` | hero carousel | immersive |
//! | `spotlight` | item 0 large, items 1-4 side list, "view all" if > 5 | featured / compact |
//! | `featured` | grid, item 0 spans 2×2 | overlay / requested style |
//! | `accordion` | question/answer list, one entry open | n/a |
//!
//! An empty set yields [`LayoutInstruction::Empty`] whatever the mode.

use crate::cards::CardStyle;
use crate::content::ContentItem;
use crate::source::{ResolvedSet, SourceDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Items shown by the spotlight layout: one lead plus four side entries.
pub const SPOTLIGHT_LIMIT: usize = 5;

/// Arrangement algorithm applied to a resolved set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
    Cards,
    Masonry,
    Carousel,
    Spotlight,
    Featured,
    Accordion,
    Hero,
}

impl DisplayMode {
    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Grid => "grid",
            DisplayMode::List => "list",
            DisplayMode::Cards => "cards",
            DisplayMode::Masonry => "masonry",
            DisplayMode::Carousel => "carousel",
            DisplayMode::Spotlight => "spotlight",
            DisplayMode::Featured => "featured",
            DisplayMode::Accordion => "accordion",
            DisplayMode::Hero => "hero",
        }
    }
}

impl From<String> for DisplayMode {
    fn from(name: String) -> Self {
        match name.as_str() {
            "grid" => DisplayMode::Grid,
            "list" => DisplayMode::List,
            "cards" => DisplayMode::Cards,
            "masonry" => DisplayMode::Masonry,
            "carousel" => DisplayMode::Carousel,
            "spotlight" => DisplayMode::Spotlight,
            "featured" => DisplayMode::Featured,
            "accordion" => DisplayMode::Accordion,
            "hero" | "immersive" => DisplayMode::Hero,
            other => {
                tracing::debug!(display_mode = other, "unknown display mode, using grid");
                DisplayMode::Grid
            }
        }
    }
}

impl From<DisplayMode> for String {
    fn from(mode: DisplayMode) -> Self {
        mode.name().to_string()
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-chosen defaults for column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Columns for `grid`, `masonry` and `featured` when the descriptor omits them.
    pub grid_columns: u8,
    /// Columns for `cards` when the descriptor omits them.
    pub cards_columns: u8,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            grid_columns: 3,
            cards_columns: 3,
        }
    }
}

/// Grid cell footprint of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub columns: u8,
    pub rows: u8,
}

impl Span {
    pub const SINGLE: Span = Span {
        columns: 1,
        rows: 1,
    };
    pub const DOUBLE: Span = Span {
        columns: 2,
        rows: 2,
    };
}

/// An item with the card style and footprint the layout assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCard {
    pub item: ContentItem,
    pub style: CardStyle,
    pub span: Span,
}

impl PlacedCard {
    fn new(item: &ContentItem, style: CardStyle) -> Self {
        Self {
            item: item.clone(),
            style,
            span: Span::SINGLE,
        }
    }
}

/// One accordion row.
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionEntry {
    pub item: ContentItem,
    pub question: String,
    pub answer: Option<String>,
}

impl AccordionEntry {
    /// Question from `question`, else the label; answer from `answer`, else
    /// the description.
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            item: item.clone(),
            question: item.question().unwrap_or(item.label()).to_string(),
            answer: item
                .answer()
                .or_else(|| item.description())
                .map(str::to_string),
        }
    }
}

/// What the rendering surface should draw for one source.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutInstruction {
    Empty,
    Grid {
        columns: u8,
        cards: Vec<PlacedCard>,
    },
    List {
        cards: Vec<PlacedCard>,
    },
    Masonry {
        columns: u8,
        cards: Vec<PlacedCard>,
    },
    ScrollCarousel {
        cards: Vec<PlacedCard>,
    },
    HeroCarousel {
        cards: Vec<PlacedCard>,
    },
    Spotlight {
        lead: PlacedCard,
        side: Vec<PlacedCard>,
        view_all: bool,
    },
    Featured {
        columns: u8,
        cards: Vec<PlacedCard>,
    },
    Accordion {
        entries: Vec<AccordionEntry>,
    },
}

impl LayoutInstruction {
    /// Short layout name for diagnostics and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutInstruction::Empty => "empty",
            LayoutInstruction::Grid { .. } => "grid",
            LayoutInstruction::List { .. } => "list",
            LayoutInstruction::Masonry { .. } => "masonry",
            LayoutInstruction::ScrollCarousel { .. } => "carousel",
            LayoutInstruction::HeroCarousel { .. } => "hero carousel",
            LayoutInstruction::Spotlight { .. } => "spotlight",
            LayoutInstruction::Featured { .. } => "featured",
            LayoutInstruction::Accordion { .. } => "accordion",
        }
    }

    /// Rendered items in display order.
    pub fn items(&self) -> Vec<&ContentItem> {
        match self {
            LayoutInstruction::Empty => Vec::new(),
            LayoutInstruction::Grid { cards, .. }
            | LayoutInstruction::List { cards }
            | LayoutInstruction::Masonry { cards, .. }
            | LayoutInstruction::ScrollCarousel { cards }
            | LayoutInstruction::HeroCarousel { cards }
            | LayoutInstruction::Featured { cards, .. } => cards.iter().map(|c| &c.item).collect(),
            LayoutInstruction::Spotlight { lead, side, .. } => std::iter::once(&lead.item)
                .chain(side.iter().map(|c| &c.item))
                .collect(),
            LayoutInstruction::Accordion { entries } => entries.iter().map(|e| &e.item).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LayoutInstruction::Empty)
    }

    /// Activate the item at `index`, handing it to `on_view`.
    ///
    /// Returns `false` (and does not call `on_view`) when out of range.
    pub fn activate(&self, index: usize, on_view: impl FnOnce(&ContentItem)) -> bool {
        match self.items().get(index) {
            Some(item) => {
                on_view(item);
                true
            }
            None => false,
        }
    }
}

fn clamp_columns(columns: Option<i64>, fallback: u8) -> u8 {
    match columns {
        Some(n) => n.clamp(1, 4) as u8,
        None => fallback.clamp(1, 4),
    }
}

/// Select a layout for `set` and assign per-item card styles.
pub fn dispatch(
    mode: DisplayMode,
    set: &ResolvedSet,
    descriptor: &SourceDescriptor,
    options: &LayoutOptions,
) -> LayoutInstruction {
    if set.is_empty() {
        return LayoutInstruction::Empty;
    }

    let requested = descriptor.card_style.as_deref();
    let style = CardStyle::from_requested(requested);
    let place_all = |style: CardStyle| -> Vec<PlacedCard> {
        set.iter().map(|item| PlacedCard::new(item, style)).collect()
    };

    match mode {
        DisplayMode::Grid => LayoutInstruction::Grid {
            columns: clamp_columns(descriptor.grid_columns, options.grid_columns),
            cards: place_all(style),
        },
        DisplayMode::Cards => LayoutInstruction::Grid {
            columns: clamp_columns(descriptor.grid_columns, options.cards_columns),
            cards: place_all(style),
        },
        DisplayMode::List => {
            let style = requested.map_or(CardStyle::Compact, |_| style);
            LayoutInstruction::List {
                cards: place_all(style),
            }
        }
        DisplayMode::Masonry => LayoutInstruction::Masonry {
            columns: clamp_columns(descriptor.grid_columns, options.grid_columns),
            cards: place_all(style),
        },
        DisplayMode::Carousel if style.is_immersive() => LayoutInstruction::HeroCarousel {
            cards: place_all(style),
        },
        DisplayMode::Carousel => LayoutInstruction::ScrollCarousel {
            cards: place_all(style),
        },
        DisplayMode::Hero => {
            let style = if style.is_immersive() {
                style
            } else {
                CardStyle::Immersive
            };
            LayoutInstruction::HeroCarousel {
                cards: place_all(style),
            }
        }
        DisplayMode::Spotlight => {
            let mut visible = set.iter().take(SPOTLIGHT_LIMIT);
            let lead = visible
                .next()
                .map(|item| PlacedCard::new(item, CardStyle::Featured));
            let side = visible
                .map(|item| PlacedCard::new(item, CardStyle::Compact))
                .collect();
            match lead {
                Some(lead) => LayoutInstruction::Spotlight {
                    lead,
                    side,
                    view_all: set.len() > SPOTLIGHT_LIMIT,
                },
                None => LayoutInstruction::Empty,
            }
        }
        DisplayMode::Featured => {
            let cards = set
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    if i == 0 {
                        PlacedCard {
                            item: item.clone(),
                            style: CardStyle::Overlay,
                            span: Span::DOUBLE,
                        }
                    } else {
                        PlacedCard::new(item, style)
                    }
                })
                .collect();
            LayoutInstruction::Featured {
                columns: clamp_columns(descriptor.grid_columns, options.grid_columns),
                cards,
            }
        }
        DisplayMode::Accordion => LayoutInstruction::Accordion {
            entries: set.iter().map(AccordionEntry::from_item).collect(),
        },
    }
}

/// Expansion state for one accordion. At most one entry is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    expanded: Option<usize>,
}

impl AccordionState {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Open `index`, closing whichever entry was open.
    pub fn expand(&mut self, index: usize) {
        self.expanded = Some(index);
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Click on an entry header: open it, or close it if it was open.
    pub fn toggle(&mut self, index: usize) {
        if self.is_expanded(index) {
            self.collapse();
        } else {
            self.expand(index);
        }
    }
}
