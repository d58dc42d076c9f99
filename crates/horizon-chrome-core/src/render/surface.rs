//! Drawing surface abstraction.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Color, Point, Rect, Size};

/// Which icon to draw in the system menu region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSource {
    /// The icon assigned to the window. Surfaces fall back to
    /// [`IconSource::Application`] when the window has none.
    #[default]
    Window,
    /// The stock application icon.
    Application,
}

/// The primitive drawing operations the chrome needs.
///
/// All coordinates are in window space. Implementations must not block: the
/// chrome is painted on every paint request, including every frame of an
/// interactive resize.
pub trait Surface {
    // =========================================================================
    // Shapes
    // =========================================================================

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a straight line `width` pixels thick. The end point is excluded.
    fn draw_line(&mut self, from: Point, to: Point, width: i32, color: Color);

    /// Draw the outline of a rectangle, inside its bounds.
    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Color);

    /// Draw an icon scaled into `rect`.
    fn draw_icon(&mut self, rect: Rect, icon: IconSource);

    // =========================================================================
    // Text
    // =========================================================================

    /// Extent of a single line of text in the chrome font.
    fn measure_text(&mut self, text: &str) -> Size;

    /// Draw a single line of text with its top-left corner at `origin`,
    /// clipped to `clip`.
    fn draw_text(&mut self, origin: Point, text: &str, clip: Rect, color: Color);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        width: i32,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        width: i32,
        color: Color,
    },
    Icon {
        rect: Rect,
        icon: IconSource,
    },
    Text {
        origin: Point,
        text: String,
        clip: Rect,
        color: Color,
    },
}

/// A surface that records commands instead of drawing.
///
/// Text is measured with a fixed advance per grapheme, which makes layout
/// deterministic without a font backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    advance: i32,
    line_height: i32,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    /// Default advance of one grapheme in pixels.
    pub const DEFAULT_ADVANCE: i32 = 7;
    /// Default line height in pixels.
    pub const DEFAULT_LINE_HEIGHT: i32 = 16;

    pub fn new() -> Self {
        Self::with_metrics(Self::DEFAULT_ADVANCE, Self::DEFAULT_LINE_HEIGHT)
    }

    /// Create a display list with a custom text advance and line height.
    pub fn with_metrics(advance: i32, line_height: i32) -> Self {
        Self {
            commands: Vec::new(),
            advance,
            line_height,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The recorded text commands.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
            _ => None,
        })
    }

    /// The color of the fill covering `rect` exactly, last one wins.
    pub fn fill_color(&self, rect: Rect) -> Option<Color> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::FillRect { rect: filled, color } if *filled == rect => Some(*color),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, width: i32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, width, color });
    }

    fn draw_icon(&mut self, rect: Rect, icon: IconSource) {
        self.commands.push(DrawCommand::Icon { rect, icon });
    }

    fn measure_text(&mut self, text: &str) -> Size {
        let graphemes = text.graphemes(true).count() as i32;
        Size::new(graphemes * self.advance, self.line_height)
    }

    fn draw_text(&mut self, origin: Point, text: &str, clip: Rect, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            clip,
            color,
        });
    }
}
