//! Carousel engines.
//!
//! Two variants share nothing but a name:
//!
//! - [`hero`]: circular, auto-advancing, five-slot perspective deck. Owns its
//!   index, pause flag and one [`tick::ScheduledTick`].
//! - [`scroll`]: linear horizontal strip. Scroll position belongs to the
//!   rendering surface; this side only derives progress, control visibility
//!   and step size from it.
//!
//! Both are single-threaded and event-driven. Time never advances on its own:
//! the surface passes the current [`std::time::Instant`] into every call that
//! can move or re-arm the autoplay timer.

pub mod hero;
pub mod scroll;
pub mod tick;

pub use hero::{ClickOutcome, HeroCarousel, SlotPosition, WindowSlot};
pub use scroll::{ScrollCarousel, ScrollDirection, ScrollMetrics, ScrollRequest};
pub use tick::ScheduledTick;
