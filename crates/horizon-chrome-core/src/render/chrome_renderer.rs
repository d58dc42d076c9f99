//! Chrome painting.

use crate::config::{ChromeMetrics, ChromePalette};
use crate::geometry::ChromeGeometry;
use crate::logging::{span_names, targets};
use crate::region::CaptionButton;
use crate::types::{Color, Point, Rect, Size};

use super::surface::{IconSource, Surface};
use super::text::fit_text;

/// Per-paint inputs taken from the window and its chrome state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintState<'a> {
    pub maximized: bool,
    pub focused: bool,
    pub hovered: Option<CaptionButton>,
    pub pressed: Option<CaptionButton>,
    pub title: &'a str,
    pub icon: IconSource,
}

/// Visual state of one caption button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    Normal,
    Hovered,
    Pressed,
}

impl PaintState<'_> {
    /// A button shows as pressed only while the pointer is still over it.
    pub fn button_visual(&self, button: CaptionButton) -> ButtonVisual {
        match (self.hovered == Some(button), self.pressed == Some(button)) {
            (true, true) => ButtonVisual::Pressed,
            (true, false) => ButtonVisual::Hovered,
            _ => ButtonVisual::Normal,
        }
    }
}

/// Paints the title bar, border, icon, title and caption buttons.
///
/// Painting reads state and never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeRenderer {
    palette: ChromePalette,
    caption_icon_size: i32,
}

impl ChromeRenderer {
    /// Offset of the back square of the restore glyph.
    const RESTORE_GLYPH_OFFSET: i32 = 2;

    pub fn new(metrics: &ChromeMetrics, palette: ChromePalette) -> Self {
        Self {
            palette,
            caption_icon_size: metrics.caption_icon_size,
        }
    }

    /// Paint the whole chrome.
    pub fn paint(&self, surface: &mut dyn Surface, geometry: &ChromeGeometry, state: &PaintState<'_>) {
        let _span = tracing::trace_span!(
            target: targets::RENDER,
            "chrome",
            operation = span_names::PAINT,
            width = geometry.size.width,
            height = geometry.size.height,
        )
        .entered();

        self.paint_frame(surface, geometry, state);
        self.paint_icon(surface, geometry, state);
        self.paint_title(surface, geometry, state);
        for button in CaptionButton::CAPTION {
            self.paint_button(surface, geometry, state, button);
        }
    }

    fn paint_frame(&self, surface: &mut dyn Surface, geometry: &ChromeGeometry, state: &PaintState<'_>) {
        surface.fill_rect(geometry.client, self.palette.background);
        surface.fill_rect(geometry.caption_area, self.palette.title_bar(state.focused));

        let border = geometry.border_width;
        if border <= 0 {
            return;
        }

        let Size { width, height } = geometry.size;
        let color = self.palette.border;
        surface.draw_line(Point::new(0, 0), Point::new(width, 0), border, color);
        surface.draw_line(
            Point::new(0, height - border),
            Point::new(width, height - border),
            border,
            color,
        );
        surface.draw_line(Point::new(0, 0), Point::new(0, height), border, color);
        surface.draw_line(
            Point::new(width - border, 0),
            Point::new(width - border, height),
            border,
            color,
        );
    }

    fn paint_icon(&self, surface: &mut dyn Surface, geometry: &ChromeGeometry, state: &PaintState<'_>) {
        if state.hovered == Some(CaptionButton::SystemMenu) {
            surface.fill_rect(geometry.sys_menu, self.palette.icon_highlight);
        }
        surface.draw_icon(geometry.icon, state.icon);
    }

    fn paint_title(&self, surface: &mut dyn Surface, geometry: &ChromeGeometry, state: &PaintState<'_>) {
        let slot = geometry.title_text;
        let Some(text) = fit_text(state.title, slot.width(), |text| surface.measure_text(text).width)
        else {
            return;
        };

        let extent = surface.measure_text(&text);
        let origin = Point::new(slot.left(), slot.top() + (slot.height() - extent.height) / 2);
        surface.draw_text(origin, &text, slot, self.palette.foreground(state.focused));
    }

    /// Background and glyph colors of a caption button.
    pub fn button_colors(&self, button: CaptionButton, state: &PaintState<'_>) -> (Color, Color) {
        let palette = &self.palette;
        let close = button == CaptionButton::Close;

        match state.button_visual(button) {
            ButtonVisual::Pressed if close => (palette.close_pressed, palette.close_glyph_hover),
            ButtonVisual::Hovered if close => (palette.close_hover, palette.close_glyph_hover),
            ButtonVisual::Pressed => (palette.button_pressed, palette.foreground_focused),
            ButtonVisual::Hovered => (palette.button_hover, palette.foreground_focused),
            ButtonVisual::Normal => (palette.title_bar(state.focused), palette.foreground(state.focused)),
        }
    }

    fn paint_button(
        &self,
        surface: &mut dyn Surface,
        geometry: &ChromeGeometry,
        state: &PaintState<'_>,
        button: CaptionButton,
    ) {
        let rect = geometry.button_paint_rect(button);
        let (background, glyph) = self.button_colors(button, state);
        surface.fill_rect(rect, background);

        let size = self.caption_icon_size;
        let center = rect.center();
        let glyph_box = Rect::new(center.x - size / 2, center.y - size / 2, size, size);

        match button {
            CaptionButton::Close => {
                let (left, top) = (glyph_box.left(), glyph_box.top());
                let (right, bottom) = (glyph_box.right(), glyph_box.bottom());
                surface.draw_line(Point::new(left, top), Point::new(right + 1, bottom + 1), 1, glyph);
                surface.draw_line(Point::new(left, bottom), Point::new(right + 1, top - 1), 1, glyph);
            }
            CaptionButton::Maximize => {
                if state.maximized {
                    let offset = Self::RESTORE_GLYPH_OFFSET;
                    surface.stroke_rect(glyph_box.offset(offset, -offset), 1, glyph);
                    surface.fill_rect(glyph_box, background);
                }
                surface.stroke_rect(glyph_box, 1, glyph);
            }
            CaptionButton::Minimize => {
                surface.draw_line(
                    Point::new(glyph_box.left(), center.y),
                    Point::new(glyph_box.right(), center.y),
                    1,
                    glyph,
                );
            }
            CaptionButton::SystemMenu => {}
        }
    }
}
