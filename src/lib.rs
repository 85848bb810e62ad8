//! # Showcase
//!
//! A content composition engine for landing pages. A page is a list of
//! sections; each section names one or more content sources, and each source
//! says which items to show, how to arrange them, and which card look to use.
//!
//! # Architecture: Resolve → Dispatch → Render
//!
//! Every source flows through three independent steps:
//!
//! ```text
//! 1. Resolve   descriptor + store  →  ResolvedSet        (which items, in order)
//! 2. Dispatch  mode + ResolvedSet  →  LayoutInstruction  (arrangement + card styles)
//! 3. Render    LayoutInstruction   →  HTML               (cards via the registry)
//! ```
//!
//! Steps 1 and 2 are pure and infallible: an unknown content type resolves to
//! nothing, an unknown card style falls back to the type's default, an unknown
//! display mode falls back to grid. A misconfigured section shows less, it
//! never fails the page.
//!
//! Interactive state (which hero slide is centered, whether autoplay is
//! paused, how far a scroll strip has moved, which accordion entry is open)
//! lives in small state machines that take the current time as an argument,
//! so they can be driven and tested without a clock.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Content types, the item model with label/description accessors, the `ContentStore` trait and the JSON `Catalog` |
//! | [`source`] | Source descriptors, selection rules and default counts, `resolve()` |
//! | [`cards`] | Card styles and the `(type, style)` renderer registry with fallback |
//! | [`layout`] | Display modes, `dispatch()` and accordion state |
//! | [`carousel`] | Hero carousel (circular five-slot window, autoplay) and scroll carousel |
//! | [`config`] | `site.toml` loading, merging over stock defaults, validation, CSS generation |
//! | [`generate`] | Composes every section and renders the page with Maud |
//! | [`output`] | CLI output formatting for `check` and `render` |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Card renderers are
//! plain `fn(&ContentItem) -> Markup`, so the registry is a static table of
//! function pointers checked at compile time, and all interpolation is
//! auto-escaped.
//!
//! ## Capability Accessors Instead of Field Probing
//!
//! The ten content kinds name their fields differently (`title`, `name`,
//! `question`). Renderers never match on the kind to find a label; they call
//! [`content::ContentItem::label`] and friends, which encode the fallback order
//! in one place.
//!
//! ## Autoplay as a Deadline
//!
//! The hero carousel does not own a timer thread. It holds a
//! [`carousel::ScheduledTick`] deadline that every state change re-arms and
//! the host polls. Manual navigation therefore always restarts the countdown,
//! and a disposed carousel can never be advanced by a late tick.

pub mod cards;
pub mod carousel;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod output;
pub mod source;

#[cfg(test)]
pub(crate) mod test_helpers;
