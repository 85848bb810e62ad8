//! Hero carousel: circular index, five-slot window, pausable autoplay.
//!
//! ## State
//!
//! `current` is an index into the item list, always valid modulo `len`
//! (meaningless when `len == 0`). `paused` is driven by pointer enter/leave.
//! One [`ScheduledTick`] drives autoplay.
//!
//! ## Visible Window
//!
//! Derived on demand from `(current, len)`, never stored:
//!
//! ```text
//! len = 7, current = 3
//!
//!   far-left   left   center   right   far-right
//!      1        2       3        4        5
//! ```
//!
//! - `len == 1`: center only.
//! - `len == 2`: center and right. Left would repeat right, so it is omitted.
//! - `3 <= len <= 4`: center, left, right.
//! - `len >= 5`: all five slots, all distinct.
//!
//! ## Autoplay
//!
//! While not paused and `len > 1`, the tick is armed one interval ahead.
//! Every change to `current`, `paused` or `len` re-arms it from the time of
//! the change, so manual navigation restarts the countdown instead of racing a
//! free-running interval.

use super::tick::ScheduledTick;
use std::fmt;
use std::time::{Duration, Instant};

/// Default time between automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Slot positions in left-to-right render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
}

impl SlotPosition {
    /// Signed distance from the center slot.
    pub fn offset(self) -> isize {
        match self {
            SlotPosition::FarLeft => -2,
            SlotPosition::Left => -1,
            SlotPosition::Center => 0,
            SlotPosition::Right => 1,
            SlotPosition::FarRight => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SlotPosition::FarLeft => "far-left",
            SlotPosition::Left => "left",
            SlotPosition::Center => "center",
            SlotPosition::Right => "right",
            SlotPosition::FarRight => "far-right",
        }
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One visible slot: where it sits and which item fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSlot {
    pub position: SlotPosition,
    pub source_index: usize,
}

/// Result of clicking a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Center clicked: open the detail view for this item.
    View(usize),
    /// Side slot clicked: carousel moved to this index.
    Moved(usize),
    /// Slot not currently shown, or nothing to show.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct HeroCarousel {
    len: usize,
    current: usize,
    paused: bool,
    tick: ScheduledTick,
}

impl HeroCarousel {
    /// Carousel over `len` items starting at index 0, autoplay armed from `now`.
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        let mut carousel = Self {
            len,
            current: 0,
            paused: false,
            tick: ScheduledTick::new(interval),
        };
        carousel.rearm(now);
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, `None` when there are no items.
    pub fn current_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick(&self) -> &ScheduledTick {
        &self.tick
    }

    fn wrap(&self, offset: isize) -> usize {
        (self.current as isize + offset).rem_euclid(self.len as isize) as usize
    }

    fn rearm(&mut self, now: Instant) {
        if !self.paused && self.len > 1 {
            self.tick.arm(now);
        } else {
            self.tick.cancel();
        }
    }

    /// Move by `delta` slots with wraparound. Permitted while paused.
    pub fn paginate(&mut self, delta: isize, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.current = self.wrap(delta);
        self.rearm(now);
    }

    /// Jump straight to `index` (indicator dots). Out-of-range is ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.current = index;
            self.rearm(now);
        }
    }

    pub fn pointer_enter(&mut self, now: Instant) {
        self.set_paused(true, now);
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.set_paused(false, now);
    }

    fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.paused != paused {
            self.paused = paused;
            self.rearm(now);
        }
    }

    /// The item list changed length. The index is clamped to the new range.
    pub fn set_len(&mut self, len: usize, now: Instant) {
        self.len = len;
        self.current = if len == 0 { 0 } else { self.current.min(len - 1) };
        self.rearm(now);
    }

    /// Poll the autoplay timer. Advances by one and returns `true` when due.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.tick.fire(now) && !self.paused && self.len > 1 {
            self.paginate(1, now);
            true
        } else {
            false
        }
    }

    /// Tear down: cancel autoplay permanently.
    pub fn dispose(&mut self) {
        self.tick.dispose();
    }

    /// Slots to draw, in left-to-right order.
    pub fn visible_window(&self) -> Vec<WindowSlot> {
        Self::window_at(self.len, self.current)
    }

    /// The window for `len` items centered on `current`, without building a
    /// carousel. Used for the static first paint.
    pub fn window_at(len: usize, current: usize) -> Vec<WindowSlot> {
        let mut positions = Vec::with_capacity(5);
        if len >= 5 {
            positions.push(SlotPosition::FarLeft);
        }
        if len >= 3 {
            positions.push(SlotPosition::Left);
        }
        if len >= 1 {
            positions.push(SlotPosition::Center);
        }
        if len >= 2 {
            positions.push(SlotPosition::Right);
        }
        if len >= 5 {
            positions.push(SlotPosition::FarRight);
        }
        positions
            .into_iter()
            .map(|position| WindowSlot {
                position,
                source_index: (current as isize + position.offset()).rem_euclid(len as isize)
                    as usize,
            })
            .collect()
    }

    /// The visible window paired with the items that fill it.
    pub fn window<'a, T>(&self, items: &'a [T]) -> Vec<(WindowSlot, &'a T)> {
        self.visible_window()
            .into_iter()
            .filter_map(|slot| items.get(slot.source_index).map(|item| (slot, item)))
            .collect()
    }

    /// Handle a click on the slot at `position`.
    ///
    /// Center yields [`ClickOutcome::View`] without moving. Side slots
    /// paginate by their offset. Slots not in the current window are ignored.
    pub fn click(&mut self, position: SlotPosition, now: Instant) -> ClickOutcome {
        let shown = self
            .visible_window()
            .iter()
            .any(|slot| slot.position == position);
        if !shown {
            return ClickOutcome::Ignored;
        }
        match position {
            SlotPosition::Center => ClickOutcome::View(self.current),
            side => {
                self.paginate(side.offset(), now);
                ClickOutcome::Moved(self.current)
            }
        }
    }

    /// [`click`](Self::click), forwarding center clicks to `on_view`.
    pub fn click_with<T>(
        &mut self,
        position: SlotPosition,
        now: Instant,
        items: &[T],
        on_view: impl FnOnce(&T),
    ) -> ClickOutcome {
        let outcome = self.click(position, now);
        if let ClickOutcome::View(index) = outcome {
            if let Some(item) = items.get(index) {
                on_view(item);
            }
        }
        outcome
    }
}
