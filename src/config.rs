//! Gallery configuration module.
//!
//! Handles loading, clamping, and layering gallery options. Options are a flat
//! set of named values grouped into TOML sections; stock defaults are
//! overridden by whatever a `config.toml` (or an inline TOML string) supplies.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [carousel]
//! enabled = true              # false renders a static grid instead
//! loop = false                # wrap around at either end
//! # step = 2                  # items per step (omit = one full page)
//! show_all_button = true
//!
//! [grid]
//! # max_images = 8            # static grid only (omit = show all)
//! show_more_indicator = true
//! more_indicator_action = "modal"   # "modal" or "load"
//! more_indicator_text = "..."
//!
//! [navigation]
//! show_navigation = true
//! show_counter = true
//! show_close_button_grid = true
//! show_close_button_single = true
//! enable_keyboard = true
//! enable_drag = true
//! drag_threshold = 50.0       # pixels
//! hover_effect = false
//!
//! [captions]
//! enabled = true
//! selector = "img"            # "img" or "self" (the image's container)
//! source = "attr"             # "attr", "data", or "text"
//! data_key = "alt"
//! position = "outside-center"
//! delay_ms = 0
//!
//! [layout]
//! # columns = 4               # explicit carousel columns (omit = responsive)
//! modal_columns = 4
//! modal_width = "80vw"
//!
//! [timing]
//! resize_debounce_ms = 100
//! modal_transition_ms = 150
//! caption_fade_ms = 300
//!
//! [[responsive]]
//! min_width = 0
//! columns = 2
//! ```
//!
//! ## Clamping, Not Rejecting
//!
//! Unknown keys and malformed TOML are errors, to catch typos early. Numeric
//! values that make no sense (zero columns, a zero step) are clamped to the
//! smallest usable value and logged with `tracing::warn!`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Gallery configuration.
///
/// All fields have defaults matching the stock widget. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Thumbnail carousel behavior.
    pub carousel: CarouselConfig,
    /// Static grid behavior (used when the carousel is disabled).
    pub grid: StaticGridConfig,
    /// Lightbox controls and input handling.
    pub navigation: NavigationConfig,
    /// Caption source and placement.
    pub captions: CaptionConfig,
    /// Button texts.
    pub labels: LabelConfig,
    /// Column counts and modal sizing.
    pub layout: LayoutConfig,
    /// Timers for debounce and transitions.
    pub timing: TimingConfig,
    /// Viewport breakpoints, as `[[responsive]]` tables.
    pub responsive: Vec<BreakpointConfig>,
}

impl GalleryConfig {
    /// Clamp out-of-range numeric options to their smallest usable value.
    pub fn clamped(mut self) -> Self {
        if self.carousel.step == Some(0) {
            tracing::warn!("carousel.step = 0 is not usable, clamping to 1");
            self.carousel.step = Some(1);
        }
        if self.layout.columns == Some(0) {
            tracing::warn!("layout.columns = 0 is not usable, clamping to 1");
            self.layout.columns = Some(1);
        }
        if self.grid.max_images == Some(0) {
            tracing::warn!("grid.max_images = 0 is not usable, showing all images");
            self.grid.max_images = None;
        }
        if self.layout.modal_columns == 0 {
            tracing::warn!("layout.modal_columns = 0 is not usable, clamping to 1");
            self.layout.modal_columns = 1;
        }
        let threshold = self.navigation.drag_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            tracing::warn!(threshold, "navigation.drag_threshold must be >= 0, clamping to 0");
            self.navigation.drag_threshold = 0.0;
        }
        for bp in &mut self.responsive {
            if bp.columns == 0 {
                tracing::warn!(
                    min_width = bp.min_width,
                    "responsive breakpoint with 0 columns, clamping to 1"
                );
                bp.columns = 1;
            }
        }
        self
    }
}

/// Thumbnail carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Use the paged carousel. When false the thumbnails render as a static grid.
    pub enabled: bool,
    /// Wrap around at either boundary instead of clamping.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Items advanced per step. `None` steps one full page.
    pub step: Option<usize>,
    /// Show the "show all" buttons in the carousel header and lightbox.
    pub show_all_button: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            looping: false,
            step: None,
            show_all_button: true,
        }
    }
}

/// What clicking the static grid's "more" indicator does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoreIndicatorAction {
    /// Open the lightbox in grid view.
    Modal,
    /// Reveal the remaining thumbnails in place.
    Load,
}

/// Static grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticGridConfig {
    /// Thumbnails shown before the "more" indicator. `None` shows all.
    pub max_images: Option<usize>,
    pub show_more_indicator: bool,
    pub more_indicator_action: MoreIndicatorAction,
    pub more_indicator_text: String,
}

impl Default for StaticGridConfig {
    fn default() -> Self {
        Self {
            max_images: None,
            show_more_indicator: true,
            more_indicator_action: MoreIndicatorAction::Modal,
            more_indicator_text: "...".to_string(),
        }
    }
}

/// Lightbox controls and input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Prev/next arrows in the single-image view.
    pub show_navigation: bool,
    /// "n / total" counter in the single-image view.
    pub show_counter: bool,
    pub show_close_button_grid: bool,
    pub show_close_button_single: bool,
    /// Arrow keys and Escape while the lightbox is open.
    pub enable_keyboard: bool,
    /// Mouse/touch drag paging on the carousel.
    pub enable_drag: bool,
    /// Minimum horizontal drag distance in pixels.
    pub drag_threshold: f64,
    pub hover_effect: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            show_navigation: true,
            show_counter: true,
            show_close_button_grid: true,
            show_close_button_single: true,
            enable_keyboard: true,
            enable_drag: true,
            drag_threshold: 50.0,
            hover_effect: false,
        }
    }
}

/// Element a caption is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptionSelector {
    #[serde(rename = "img")]
    Image,
    /// The element the gallery was built on, i.e. the image's container.
    #[serde(rename = "self")]
    Container,
}

/// How a caption is extracted from the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionSource {
    /// A plain attribute named by `data_key`.
    Attr,
    /// A `data-*` value named by `data_key`.
    Data,
    /// The element's text content.
    Text,
}

/// Where the caption sits relative to the single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    OutsideLeft,
    OutsideCenter,
    OutsideRight,
}

/// Caption overlay band: over the top of the image, over the bottom, or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionPlacement {
    Top,
    Bottom,
    Outside,
}

impl CaptionPosition {
    /// Suffix used in the `vns-gallery-caption-*` class.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::OutsideLeft => "outside-left",
            Self::OutsideCenter => "outside-center",
            Self::OutsideRight => "outside-right",
        }
    }

    pub fn placement(self) -> CaptionPlacement {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => CaptionPlacement::Top,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => CaptionPlacement::Bottom,
            Self::OutsideLeft | Self::OutsideCenter | Self::OutsideRight => {
                CaptionPlacement::Outside
            }
        }
    }
}

/// Caption settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionConfig {
    pub enabled: bool,
    pub selector: CaptionSelector,
    pub source: CaptionSource,
    /// Attribute or data key to read when `source` is `attr` or `data`.
    pub data_key: String,
    pub position: CaptionPosition,
    /// Delay before the caption is revealed, in milliseconds.
    pub delay_ms: u64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            selector: CaptionSelector::Image,
            source: CaptionSource::Attr,
            data_key: "alt".to_string(),
            position: CaptionPosition::OutsideCenter,
            delay_ms: 0,
        }
    }
}

/// Button texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    pub show_all: String,
    pub prev: String,
    pub next: String,
    pub thumb_prev: String,
    pub thumb_next: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            show_all: "Show all".to_string(),
            prev: "◀".to_string(),
            next: "▶".to_string(),
            thumb_prev: "‹".to_string(),
            thumb_next: "›".to_string(),
        }
    }
}

/// Column counts and modal sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Explicit carousel columns. Wins over the responsive table when set.
    pub columns: Option<usize>,
    /// Columns of the lightbox grid view.
    pub modal_columns: usize,
    /// CSS width of the single-image view and max width of the grid view.
    pub modal_width: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: None,
            modal_columns: 4,
            modal_width: "80vw".to_string(),
        }
    }
}

/// Timer settings, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Quiet window that coalesces resize notifications.
    pub resize_debounce_ms: u64,
    /// Delay between `Show`/`Close` and `Shown`/`Closed`.
    pub modal_transition_ms: u64,
    pub caption_fade_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 100,
            modal_transition_ms: 150,
            caption_fade_ms: 300,
        }
    }
}

/// One `[[responsive]]` entry: from `min_width` pixels up, show `columns` items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointConfig {
    pub min_width: u32,
    pub columns: usize,
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, deserialize, and clamp.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    Ok(config.clamped())
}

/// Load `config.toml` from `dir` over the stock defaults.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Parse inline TOML options over the stock defaults.
pub fn config_from_str(options: &str) -> Result<GalleryConfig, ConfigError> {
    let overlay: toml::Value = toml::from_str(options)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
pub fn stock_config_toml() -> &'static str {
    r##"# Gallery Configuration
# =====================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Thumbnail carousel
# ---------------------------------------------------------------------------
[carousel]
# Page through thumbnails. false renders a static grid instead.
enabled = true
# Wrap around at the first and last page instead of stopping.
loop = false
# Items advanced per click or drag. Omit to advance one full page.
# step = 1
# Show the "show all" buttons (carousel header and lightbox).
show_all_button = true

# ---------------------------------------------------------------------------
# Static grid (carousel.enabled = false)
# ---------------------------------------------------------------------------
[grid]
# Thumbnails shown before the "more" indicator. Omit to show all.
# max_images = 8
show_more_indicator = true
# "modal" opens the lightbox grid, "load" reveals the rest in place.
more_indicator_action = "modal"
more_indicator_text = "..."

# ---------------------------------------------------------------------------
# Lightbox controls and input
# ---------------------------------------------------------------------------
[navigation]
show_navigation = true
show_counter = true
show_close_button_grid = true
show_close_button_single = true
enable_keyboard = true
enable_drag = true
# Minimum horizontal drag distance (pixels) that pages the carousel.
drag_threshold = 50.0
hover_effect = false

# ---------------------------------------------------------------------------
# Captions
# ---------------------------------------------------------------------------
[captions]
enabled = true
# "img" reads from the image, "self" from its container.
selector = "img"
# "attr", "data", or "text".
source = "attr"
data_key = "alt"
# top-left, top-center, top-right, bottom-left, bottom-center,
# bottom-right, outside-left, outside-center, outside-right
position = "outside-center"
delay_ms = 0

# ---------------------------------------------------------------------------
# Button labels
# ---------------------------------------------------------------------------
[labels]
show_all = "Show all"
prev = "◀"
next = "▶"
thumb_prev = "‹"
thumb_next = "›"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Explicit carousel columns. Omit to use [[responsive]] or the built-in
# tiers (>= 1024px: 4, >= 768px: 3, otherwise 2).
# columns = 4
modal_columns = 4
modal_width = "80vw"

# ---------------------------------------------------------------------------
# Timing (milliseconds)
# ---------------------------------------------------------------------------
[timing]
resize_debounce_ms = 100
modal_transition_ms = 150
caption_fade_ms = 300

# ---------------------------------------------------------------------------
# Responsive breakpoints (none by default)
# ---------------------------------------------------------------------------
# [[responsive]]
# min_width = 0
# columns = 1
#
# [[responsive]]
# min_width = 900
# columns = 5
"##
}
