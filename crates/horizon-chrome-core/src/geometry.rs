//! Geometry resolver.
//!
//! [`ChromeGeometry::resolve`] turns the current window size and maximized
//! flag into the rectangles of every chrome region. It holds no state and does
//! no I/O: the window size changes on every frame of an interactive resize, so
//! the geometry is recomputed for every hit test and every paint.
//!
//! All rectangles are in window coordinates (origin at the top-left corner of
//! the window frame).
//!
//! ```text
//!  +--------------------------------------------------------------+
//!  | [icon] Title text...                    |  _  |  []  |  X   |  <- title bar
//!  +--------------------------------------------------------------+
//!  |                                                              |
//!  |                        client area                           |
//!  |                                                              |
//!  +--------------------------------------------------------------+
//! ```

use crate::config::ChromeMetrics;
use crate::region::CaptionButton;
use crate::types::{Point, Rect, Size};

/// The two rectangles of one caption button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRects {
    /// Area painted (and invalidated) for the button.
    pub paint: Rect,
    /// Area that resolves to the button during hit testing.
    ///
    /// On a restored window this is pulled away from the window edges by the
    /// border-check distance so the resize strip keeps priority there.
    pub hit: Rect,
}

/// Rectangles of every chrome region for one window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeGeometry {
    /// Window size, frame included.
    pub size: Size,
    pub maximized: bool,
    /// Painted border thickness: zero while maximized.
    pub border_width: i32,
    /// Width of the resize strips and edge of the corner squares.
    pub resize_thickness: i32,
    pub title_bar_height: i32,
    /// Full strip across the top of the window, `title_bar_height` tall.
    pub title_bar: Rect,
    /// The painted part of the title bar inside the border.
    pub caption_area: Rect,
    pub client: Rect,
    /// Where the window icon is drawn.
    pub icon: Rect,
    /// Icon plus its highlight margin; opens the system menu.
    pub sys_menu: Rect,
    /// Space available for the title text.
    pub title_text: Rect,
    pub close: ButtonRects,
    pub maximize: ButtonRects,
    pub minimize: ButtonRects,
}

impl ChromeGeometry {
    /// Compute the chrome layout for a window.
    pub fn resolve(size: Size, maximized: bool, metrics: &ChromeMetrics) -> Self {
        debug_assert!(metrics.validate().is_ok(), "invalid chrome metrics: {metrics:?}");

        let width = size.width;
        let height = size.height;
        let border = if maximized { 0 } else { metrics.border_width };
        let check = if maximized { 0 } else { metrics.border_check };
        let bar_height = metrics.title_bar_height;
        let button_width = metrics.caption_button_width;

        let title_bar = Rect::new(0, 0, width, bar_height);
        let caption_area = Rect::from_ltrb(border, border, width - border, bar_height);

        let close_paint = Rect::from_ltrb(width - border - button_width, border, width - border, bar_height);
        let maximize_paint = close_paint.offset(-button_width, 0);
        let minimize_paint = close_paint.offset(-button_width * 2, 0);

        let close = ButtonRects {
            paint: close_paint,
            hit: close_paint.adjust(0, check, -check, 0),
        };
        let maximize = ButtonRects {
            paint: maximize_paint,
            hit: maximize_paint.adjust(0, check, 0, 0),
        };
        let minimize = ButtonRects {
            paint: minimize_paint,
            hit: minimize_paint.adjust(0, check, 0, 0),
        };

        let icon_size = metrics.small_icon_size;
        let margin = icon_size / 2;
        let icon = Rect::new(
            metrics.left_padding + margin,
            border + (bar_height - border - icon_size) / 2,
            icon_size,
            icon_size,
        );
        let sys_menu = Rect::from_ltrb(icon.left() - margin, border, icon.right() + margin, bar_height);

        let text_right = (minimize_paint.left() - metrics.left_padding).max(sys_menu.right());
        let title_text = Rect::from_ltrb(sys_menu.right(), border, text_right, bar_height);

        let client = Rect::from_ltrb(
            border,
            bar_height,
            width - border,
            (height - border).max(bar_height),
        );

        Self {
            size,
            maximized,
            border_width: border,
            resize_thickness: border + check,
            title_bar_height: bar_height,
            title_bar,
            caption_area,
            client,
            icon,
            sys_menu,
            title_text,
            close,
            maximize,
            minimize,
        }
    }

    /// Bounds of the whole window in window coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    fn button_rects(&self, button: CaptionButton) -> ButtonRects {
        match button {
            CaptionButton::Close => self.close,
            CaptionButton::Maximize => self.maximize,
            CaptionButton::Minimize => self.minimize,
            CaptionButton::SystemMenu => ButtonRects {
                paint: self.sys_menu,
                hit: self.sys_menu,
            },
        }
    }

    /// Rectangle painted for a button.
    pub fn button_paint_rect(&self, button: CaptionButton) -> Rect {
        self.button_rects(button).paint
    }

    /// Rectangle that hit-tests as a button.
    pub fn button_hit_rect(&self, button: CaptionButton) -> Rect {
        self.button_rects(button).hit
    }

    /// The button whose hit rectangle contains `point`.
    ///
    /// Checked in hit-test order: system menu, close, maximize, minimize.
    pub fn button_at(&self, point: Point) -> Option<CaptionButton> {
        [
            CaptionButton::SystemMenu,
            CaptionButton::Close,
            CaptionButton::Maximize,
            CaptionButton::Minimize,
        ]
        .into_iter()
        .find(|button| self.button_hit_rect(*button).contains(point))
    }

    /// Smallest window size that keeps the buttons clear of the icon.
    pub fn min_track_size(&self) -> Size {
        Size::new(
            self.close.paint.width() * 3 + self.border_width * 2 + self.sys_menu.right(),
            self.title_bar_height + self.border_width,
        )
    }
}
