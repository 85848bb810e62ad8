//! Scroll carousel: a horizontally scrolling strip.
//!
//! The rendering surface owns the scroll position and reports it as
//! [`ScrollMetrics`]. This side only answers three questions:
//!
//! - How far along is the strip? [`ScrollCarousel::progress`], in percent.
//!   A strip with no overflow counts as fully scrolled (100%).
//! - Which arrows are visible? Left once scrolled more than `edge_threshold`
//!   px from the start; right while more than `edge_threshold` px remain.
//! - How far does one arrow click move? `step_ratio` × viewport width,
//!   smooth-scrolled.
//!
//! No autoplay, no pause, no wraparound.

/// Scroll state reported by the rendering surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    /// Maximum `scroll_left`; zero when content fits.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn has_overflow(&self) -> bool {
        self.scroll_width > self.client_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// A relative scroll the surface should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Signed horizontal delta in px (negative scrolls left).
    pub delta: f64,
    pub smooth: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCarousel {
    pub step_ratio: f64,
    pub edge_threshold: f64,
}

impl Default for ScrollCarousel {
    fn default() -> Self {
        Self {
            step_ratio: 0.75,
            edge_threshold: 10.0,
        }
    }
}

impl ScrollCarousel {
    pub fn new(step_ratio: f64, edge_threshold: f64) -> Self {
        Self {
            step_ratio,
            edge_threshold,
        }
    }

    /// Scroll progress in percent, clamped to `0..=100`.
    pub fn progress(&self, m: &ScrollMetrics) -> f64 {
        if !m.has_overflow() {
            return 100.0;
        }
        (m.scroll_left / m.max_scroll() * 100.0).clamp(0.0, 100.0)
    }

    pub fn show_left(&self, m: &ScrollMetrics) -> bool {
        m.scroll_left > self.edge_threshold
    }

    pub fn show_right(&self, m: &ScrollMetrics) -> bool {
        m.max_scroll() - m.scroll_left > self.edge_threshold
    }

    /// The scroll an arrow click in `direction` should trigger.
    pub fn step(&self, direction: ScrollDirection, m: &ScrollMetrics) -> ScrollRequest {
        let distance = m.client_width * self.step_ratio;
        ScrollRequest {
            delta: match direction {
                ScrollDirection::Left => -distance,
                ScrollDirection::Right => distance,
            },
            smooth: true,
        }
    }
}
