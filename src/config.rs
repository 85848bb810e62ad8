//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. User files are sparse:
//! they are merged on top of the stock defaults, so a file only needs the keys
//! it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Showcase"
//!
//! [layout]
//! grid_columns = 3          # grid / masonry / featured default (1-4)
//! cards_columns = 3         # "cards" default (1-4)
//!
//! [carousel]
//! autoplay_ms = 5000        # hero carousel advance interval
//! scroll_step = 0.75        # viewport fraction per scroll arrow click
//! edge_threshold = 10.0     # px before scroll arrows appear
//!
//! [theme]
//! content_width = "72rem"
//! card_gap = "1.5rem"
//! card_radius = "0.75rem"
//!
//! [theme.section_padding]
//! size = "8vw"
//! min = "3rem"
//! max = "7rem"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! accent = "#d9480f"
//! surface = "#f5f5f5"
//!
//! [colors.dark]
//! background = "#0b0c10"
//! text = "#eeeeee"
//! text_muted = "#9a9a9a"
//! border = "#2a2d34"
//! accent = "#ff7a45"
//! surface = "#16181d"
//!
//! [[sections]]
//! id = "news"
//! title = "Latest news"
//!
//! [[sections.sources]]
//! type = "news"
//! display_mode = "featured"
//! card_style = "overlay"
//! ```
//!
//! ## Merging
//!
//! Tables merge key by key; arrays (including `sections`) and scalars replace
//! the stock value wholesale. Unknown keys are rejected to catch typos early.
//!
//! Source descriptors are the exception to strictness: an unknown `type`,
//! `card_style`, `display_mode` or `selection` keyword, or an out-of-range
//! `grid_columns`, is not a config error. Those degrade at render time instead, so one bad section
//! never takes the page down.

use crate::carousel::ScrollCarousel;
use crate::layout::LayoutOptions;
use crate::source::SourceDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document title.
    pub title: String,
    /// Default column counts.
    pub layout: LayoutConfig,
    /// Carousel timing and scrolling.
    pub carousel: CarouselConfig,
    /// Spacing and sizing custom properties.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Page sections, top to bottom.
    pub sections: Vec<SectionConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Showcase".to_string(),
            layout: LayoutConfig::default(),
            carousel: CarouselConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
            sections: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, columns) in [
            ("layout.grid_columns", self.layout.grid_columns),
            ("layout.cards_columns", self.layout.cards_columns),
        ] {
            if !(1..=4).contains(&columns) {
                return Err(ConfigError::Validation(format!("{key} must be 1-4")));
            }
        }
        if self.carousel.autoplay_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.autoplay_ms must be greater than 0".into(),
            ));
        }
        if !(self.carousel.scroll_step > 0.0 && self.carousel.scroll_step <= 1.0) {
            return Err(ConfigError::Validation(
                "carousel.scroll_step must be in (0, 1]".into(),
            ));
        }
        if self.carousel.edge_threshold < 0.0 {
            return Err(ConfigError::Validation(
                "carousel.edge_threshold must not be negative".into(),
            ));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "sections.id must not be empty".into(),
                ));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate section id \"{}\"",
                    section.id
                )));
            }
        }
        Ok(())
    }
}

/// Default column counts handed to the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub grid_columns: u8,
    pub cards_columns: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let options = LayoutOptions::default();
        Self {
            grid_columns: options.grid_columns,
            cards_columns: options.cards_columns,
        }
    }
}

impl LayoutConfig {
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions {
            grid_columns: self.grid_columns,
            cards_columns: self.cards_columns,
        }
    }
}

/// Carousel behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Hero autoplay interval in milliseconds.
    pub autoplay_ms: u64,
    /// Fraction of the viewport one scroll arrow click moves.
    pub scroll_step: f64,
    /// Distance in px from either edge before the scroll arrows appear.
    pub edge_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let scroll = ScrollCarousel::default();
        Self {
            autoplay_ms: 5000,
            scroll_step: scroll.step_ratio,
            edge_threshold: scroll.edge_threshold,
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_ms)
    }

    pub fn scroll_engine(&self) -> ScrollCarousel {
        ScrollCarousel::new(self.scroll_step, self.edge_threshold)
    }
}

/// One page section: a heading band with one or more content sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    /// Anchor id, unique per site.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Markdown shown under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// CSS background for the section band (color, gradient or `url(...)`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default)]
    pub sources: Vec<SourceDescriptor>,
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"3rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"7rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Vertical padding of each section band.
    pub section_padding: ClampSize,
    /// Maximum width of section content.
    pub content_width: String,
    /// Gap between cards in grids, lists and carousels.
    pub card_gap: String,
    /// Corner radius of cards.
    pub card_radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "3rem".to_string(),
                max: "7rem".to_string(),
            },
            content_width: "72rem".to_string(),
            card_gap: "1.5rem".to_string(),
            card_radius: "0.75rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text: card meta lines, subtitles.
    pub text_muted: String,
    pub border: String,
    /// Highlights: active indicator dot, progress bar, links.
    pub accent: String,
    /// Card background.
    pub surface: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#d9480f".to_string(),
            surface: "#f5f5f5".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b0c10".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#9a9a9a".to_string(),
            border: "#2a2d34".to_string(),
            accent: "#ff7a45".to_string(),
            surface: "#16181d".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, merged over stock defaults.
///
/// A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(
        path = %path.display(),
        sections = config.sections.len(),
        "loaded site config"
    );
    Ok(config)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Document title.
title = "Showcase"

# ---------------------------------------------------------------------------
# Layout defaults
# ---------------------------------------------------------------------------
[layout]
# Columns for grid, masonry and featured layouts when a source omits
# grid_columns (1-4).
grid_columns = 3

# Columns for the "cards" display mode when a source omits grid_columns (1-4).
cards_columns = 3

# ---------------------------------------------------------------------------
# Carousels
# ---------------------------------------------------------------------------
[carousel]
# Hero carousel: milliseconds between automatic advances.
autoplay_ms = 5000

# Scroll carousel: fraction of the visible width one arrow click scrolls.
scroll_step = 0.75

# Scroll carousel: px from either edge before the arrows appear.
edge_threshold = 10.0

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Maximum width of section content (CSS value).
content_width = "72rem"

# Gap between cards (CSS value).
card_gap = "1.5rem"

# Card corner radius (CSS value).
card_radius = "0.75rem"

# Vertical padding of each section, as CSS clamp(min, size, max).
[theme.section_padding]
size = "8vw"
min = "3rem"
max = "7rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"    # Card meta, subtitles
border = "#e0e0e0"
accent = "#d9480f"        # Indicator dots, progress bar
surface = "#f5f5f5"       # Card background

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b0c10"
text = "#eeeeee"
text_muted = "#9a9a9a"
border = "#2a2d34"
accent = "#ff7a45"
surface = "#16181d"

# ---------------------------------------------------------------------------
# Sections
# ---------------------------------------------------------------------------
# Each section is a band on the page with an optional heading and one or
# more content sources. Example:
#
# [[sections]]
# id = "news"
# title = "Latest news"
# subtitle = "Straight from the studio"
# intro = "Patch notes and **announcements**."
# background = "#101218"
#
# [[sections.sources]]
# type = "news"              # news, classes, features, media, weapons,
#                            # devices, maps, faq, game-modes, roadmap
# display_mode = "featured"  # grid, cards, list, masonry, carousel,
#                            # spotlight, featured, accordion, hero
# card_style = "overlay"     # default, compact, featured, overlay, minimal,
#                            # detailed, immersive, hero
# selection = "all"          # or a list of ids: ["n1", "n4"]
# count = 3                  # omit for the per-type default
# fetch_all = false          # true ignores count
# grid_columns = 3           # 1-4
# category = "q3"            # roadmap only
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-surface: {light_surface};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-surface: {dark_surface};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_surface = colors.light.surface,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_surface = colors.dark.surface,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --section-padding: {section_padding};
    --content-width: {content_width};
    --card-gap: {card_gap};
    --card-radius: {card_radius};
}}"#,
        section_padding = theme.section_padding.to_css(),
        content_width = theme.content_width,
        card_gap = theme.card_gap,
        card_radius = theme.card_radius,
    )
}
