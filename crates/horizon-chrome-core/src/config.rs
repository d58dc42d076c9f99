//! Chrome configuration: layout metrics, palette and initial window settings.
//!
//! Every value has a default matching the reference chrome (32 px title bar,
//! 46 px caption buttons, 1 px border, dark palette). A configuration can be
//! loaded from TOML; missing keys keep their defaults.
//!
//! ```toml
//! [metrics]
//! title_bar_height = 32
//! caption_button_width = 46
//!
//! [palette]
//! close_hover = "#e81123"
//!
//! [window]
//! title = "Simple Window"
//! width = 700
//! height = 500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::error::{ChromeError, Result};
use crate::logging::targets;
use crate::types::{Color, Size};

/// Default title bar height in pixels.
pub const TITLEBAR_HEIGHT: i32 = 32;
/// Default width of one caption button in pixels.
pub const CAPTION_BUTTON_WIDTH: i32 = 46;
/// Default border thickness of a restored window.
pub const BORDER_WIDTH: i32 = 1;
/// Default distance that pulls button hit areas away from the resize strip.
pub const BORDER_CHECK: i32 = 4;
/// Default padding left of the window icon.
pub const LEFT_PADDING: i32 = 4;
/// Default edge length of the glyph box inside a caption button.
pub const CAPTION_ICON_SIZE: i32 = 10;
/// Default small icon size when the platform does not report one.
pub const SMALL_ICON_SIZE: i32 = 16;

const_assert!(CAPTION_ICON_SIZE < CAPTION_BUTTON_WIDTH);
const_assert!(BORDER_WIDTH + BORDER_CHECK < TITLEBAR_HEIGHT);

/// Fixed layout constants the geometry is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeMetrics {
    /// Height of the title bar, top border included.
    pub title_bar_height: i32,
    /// Width of each caption button.
    pub caption_button_width: i32,
    /// Border thickness while restored (maximized windows have none).
    pub border_width: i32,
    /// Extra resize tolerance that keeps button hit areas off the window edge.
    pub border_check: i32,
    /// Padding between the left border and the icon highlight.
    pub left_padding: i32,
    /// Edge length of the close/maximize/minimize glyphs.
    pub caption_icon_size: i32,
    /// Edge length of the window icon; platforms overwrite this at creation.
    pub small_icon_size: i32,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: TITLEBAR_HEIGHT,
            caption_button_width: CAPTION_BUTTON_WIDTH,
            border_width: BORDER_WIDTH,
            border_check: BORDER_CHECK,
            left_padding: LEFT_PADDING,
            caption_icon_size: CAPTION_ICON_SIZE,
            small_icon_size: SMALL_ICON_SIZE,
        }
    }
}

impl ChromeMetrics {
    /// Replace the icon size with the platform's small-icon metric.
    pub fn with_small_icon_size(mut self, size: i32) -> Self {
        if size > 0 {
            self.small_icon_size = size;
        }
        self
    }

    /// Check that the metrics describe a drawable chrome.
    pub fn validate(&self) -> Result<()> {
        fn positive(value: i32, field: &'static str) -> Result<()> {
            if value > 0 {
                Ok(())
            } else {
                Err(ChromeError::InvalidConfig {
                    field,
                    reason: "must be positive",
                })
            }
        }

        fn non_negative(value: i32, field: &'static str) -> Result<()> {
            if value >= 0 {
                Ok(())
            } else {
                Err(ChromeError::InvalidConfig {
                    field,
                    reason: "must not be negative",
                })
            }
        }

        positive(self.title_bar_height, "metrics.title_bar_height")?;
        positive(self.caption_button_width, "metrics.caption_button_width")?;
        positive(self.caption_icon_size, "metrics.caption_icon_size")?;
        positive(self.small_icon_size, "metrics.small_icon_size")?;
        non_negative(self.border_width, "metrics.border_width")?;
        non_negative(self.border_check, "metrics.border_check")?;
        non_negative(self.left_padding, "metrics.left_padding")?;

        if self.border_width + self.border_check >= self.title_bar_height {
            return Err(ChromeError::InvalidConfig {
                field: "metrics.border_check",
                reason: "leaves no room for the caption buttons",
            });
        }
        if self.caption_icon_size >= self.caption_button_width {
            return Err(ChromeError::InvalidConfig {
                field: "metrics.caption_icon_size",
                reason: "must be smaller than the caption button",
            });
        }

        Ok(())
    }
}

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromePalette {
    /// Title bar fill while the window has focus.
    pub title_bar_focused: Color,
    /// Title bar fill while the window is inactive.
    pub title_bar_unfocused: Color,
    /// Frame lines.
    pub border: Color,
    /// Fill behind the client area.
    pub background: Color,
    /// Title text and glyphs while focused.
    pub foreground_focused: Color,
    /// Title text and glyphs while inactive.
    pub foreground_unfocused: Color,
    /// Maximize/minimize background under the pointer.
    pub button_hover: Color,
    /// Maximize/minimize background while held down.
    pub button_pressed: Color,
    /// Close background under the pointer.
    pub close_hover: Color,
    /// Close background while held down.
    pub close_pressed: Color,
    /// Close glyph on a highlighted close button.
    pub close_glyph_hover: Color,
    /// Backdrop behind a hovered window icon.
    pub icon_highlight: Color,
}

impl Default for ChromePalette {
    fn default() -> Self {
        Self {
            title_bar_focused: Color::BLACK,
            title_bar_unfocused: Color::rgb(0x2f, 0x2f, 0x2f),
            border: Color::rgb(0x4f, 0x4f, 0x4f),
            background: Color::rgb(0x1e, 0x1e, 0x1e),
            foreground_focused: Color::WHITE,
            foreground_unfocused: Color::rgb(0x7f, 0x7f, 0x7f),
            button_hover: Color::rgb(0x1a, 0x1a, 0x1a),
            button_pressed: Color::rgb(0x33, 0x33, 0x33),
            close_hover: Color::rgb(0xe8, 0x11, 0x23),
            close_pressed: Color::rgb(0xf1, 0x70, 0x7a),
            close_glyph_hover: Color::WHITE,
            icon_highlight: Color::rgb(0x3f, 0x3f, 0x3f),
        }
    }
}

impl ChromePalette {
    /// Title bar fill for the given focus state.
    pub fn title_bar(&self, focused: bool) -> Color {
        if focused {
            self.title_bar_focused
        } else {
            self.title_bar_unfocused
        }
    }

    /// Text and glyph color for the given focus state.
    pub fn foreground(&self, focused: bool) -> Color {
        if focused {
            self.foreground_focused
        } else {
            self.foreground_unfocused
        }
    }
}

/// Initial placement and title of the demo window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Simple Window".to_string(),
            x: 200,
            y: 200,
            width: 700,
            height: 500,
        }
    }
}

impl WindowSettings {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Complete chrome configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub metrics: ChromeMetrics,
    pub palette: ChromePalette,
    pub window: WindowSettings,
}

impl ChromeConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ChromeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChromeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded chrome configuration");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> String {
        // Every field is a plain value, serialization cannot fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Check metrics and window settings.
    pub fn validate(&self) -> Result<()> {
        self.metrics.validate()?;
        if self.window.size().is_empty() {
            return Err(ChromeError::InvalidConfig {
                field: "window",
                reason: "width and height must be positive",
            });
        }
        Ok(())
    }
}
