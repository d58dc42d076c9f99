//! GDI drawing surface and double-buffered painting.

use std::ffi::c_void;

use horizon_chrome_core::{Color, IconSource, Point, Rect, Size, Surface};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, RECT, SIZE, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, CreateFontIndirectW,
    CreatePen, CreateSolidBrush, DEFAULT_GUI_FONT, DeleteDC, DeleteObject, ETO_CLIPPED, EndPaint,
    ExtTextOutW, FillRect, GetStockObject, GetTextExtentPoint32W, HBITMAP, HDC, HFONT, HGDIOBJ,
    HOLLOW_BRUSH, LOGFONTW, LineTo, MoveToEx, OffsetViewportOrgEx, PAINTSTRUCT, PS_INSIDEFRAME,
    PS_SOLID, Rectangle, SRCCOPY, SelectObject, SetBkMode, SetTextColor, SetViewportOrgEx,
    TRANSPARENT,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DI_NORMAL, DrawIconEx, HICON, ICON_SMALL, ICON_SMALL2, IDI_APPLICATION, LoadIconW,
    SendMessageW, WM_GETICON,
};
use windows::core::PCWSTR;

use super::codes::{rect_from_win32, rect_to_win32};
use crate::LOG_TARGET;

const FONT_FACE: &str = "Segoe UI";
const FONT_HEIGHT: i32 = -12;
const FONT_WEIGHT_NORMAL: i32 = 400;

fn colorref(color: Color) -> COLORREF {
    COLORREF(color.to_bgr())
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// A [`Surface`] drawing into a device context with GDI.
///
/// Selects the caption font on creation and restores the previous font when
/// dropped.
pub struct GdiSurface {
    hdc: HDC,
    hwnd: HWND,
    /// Font created for this surface, deleted on drop. `None` when the stock
    /// GUI font is in use.
    font: Option<HFONT>,
    previous_font: HGDIOBJ,
}

impl GdiSurface {
    /// Wrap `hdc`, which paints window `hwnd`.
    pub fn new(hdc: HDC, hwnd: HWND) -> Self {
        let font = create_caption_font();
        let previous_font = unsafe {
            match font {
                Some(font) => SelectObject(hdc, font),
                None => SelectObject(hdc, GetStockObject(DEFAULT_GUI_FONT)),
            }
        };
        Self {
            hdc,
            hwnd,
            font,
            previous_font,
        }
    }

    fn window_icon(&self) -> Option<HICON> {
        [ICON_SMALL2, ICON_SMALL].into_iter().find_map(|kind| {
            let result =
                unsafe { SendMessageW(self.hwnd, WM_GETICON, WPARAM(kind as usize), LPARAM(0)) };
            let icon = HICON(result.0 as *mut c_void);
            (!icon.is_invalid()).then_some(icon)
        })
    }
}

fn create_caption_font() -> Option<HFONT> {
    let mut logfont = LOGFONTW {
        lfHeight: FONT_HEIGHT,
        lfWeight: FONT_WEIGHT_NORMAL,
        ..Default::default()
    };
    for (slot, unit) in logfont.lfFaceName.iter_mut().zip(wide(FONT_FACE)) {
        *slot = unit;
    }

    let font = unsafe { CreateFontIndirectW(&logfont) };
    if font.is_invalid() {
        tracing::warn!(target: LOG_TARGET, face = FONT_FACE, "caption font unavailable, using stock GUI font");
        None
    } else {
        Some(font)
    }
}

impl Drop for GdiSurface {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.hdc, self.previous_font);
            if let Some(font) = self.font.take() {
                let _ = DeleteObject(font);
            }
        }
    }
}

impl Surface for GdiSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect_to_win32(rect);
        unsafe {
            let brush = CreateSolidBrush(colorref(color));
            FillRect(self.hdc, &rect, brush);
            let _ = DeleteObject(brush);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, width: i32, color: Color) {
        unsafe {
            let pen = CreatePen(PS_SOLID, width, colorref(color));
            let previous = SelectObject(self.hdc, pen);
            let _ = MoveToEx(self.hdc, from.x, from.y, None);
            let _ = LineTo(self.hdc, to.x, to.y);
            SelectObject(self.hdc, previous);
            let _ = DeleteObject(pen);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: i32, color: Color) {
        unsafe {
            let pen = CreatePen(PS_INSIDEFRAME, width, colorref(color));
            let previous_pen = SelectObject(self.hdc, pen);
            let previous_brush = SelectObject(self.hdc, GetStockObject(HOLLOW_BRUSH));
            let _ = Rectangle(self.hdc, rect.left(), rect.top(), rect.right(), rect.bottom());
            SelectObject(self.hdc, previous_brush);
            SelectObject(self.hdc, previous_pen);
            let _ = DeleteObject(pen);
        }
    }

    fn draw_icon(&mut self, rect: Rect, icon: IconSource) {
        let handle = match icon {
            IconSource::Window => self.window_icon(),
            IconSource::Application => None,
        };
        let handle = match handle {
            Some(handle) => handle,
            None => match unsafe { LoadIconW(None, IDI_APPLICATION) } {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::warn!(target: LOG_TARGET, error = %e, "no icon to draw");
                    return;
                }
            },
        };

        let result = unsafe {
            DrawIconEx(
                self.hdc,
                rect.left(),
                rect.top(),
                handle,
                rect.width(),
                rect.height(),
                0,
                None,
                DI_NORMAL,
            )
        };
        if let Err(e) = result {
            tracing::warn!(target: LOG_TARGET, error = %e, "DrawIconEx failed");
        }
    }

    fn measure_text(&mut self, text: &str) -> Size {
        let text = wide(text);
        let mut size = SIZE::default();
        unsafe {
            let _ = GetTextExtentPoint32W(self.hdc, &text, &mut size);
        }
        Size::new(size.cx, size.cy)
    }

    fn draw_text(&mut self, origin: Point, text: &str, clip: Rect, color: Color) {
        let text = wide(text);
        let clip = rect_to_win32(clip);
        unsafe {
            SetTextColor(self.hdc, colorref(color));
            SetBkMode(self.hdc, TRANSPARENT);
            let _ = ExtTextOutW(
                self.hdc,
                origin.x,
                origin.y,
                ETO_CLIPPED,
                Some(&clip as *const RECT),
                PCWSTR(text.as_ptr()),
                text.len() as u32,
                None,
            );
        }
    }
}

// ============================================================================
// Double buffering
// ============================================================================

/// An offscreen bitmap covering the invalid area of one paint.
struct BackBuffer {
    dc: HDC,
    bitmap: HBITMAP,
    previous_bitmap: HGDIOBJ,
    area: Rect,
}

impl BackBuffer {
    fn new(target: HDC, area: Rect) -> Option<Self> {
        unsafe {
            let dc = CreateCompatibleDC(target);
            if dc.is_invalid() {
                return None;
            }
            let bitmap = CreateCompatibleBitmap(target, area.width(), area.height());
            if bitmap.is_invalid() {
                let _ = DeleteDC(dc);
                return None;
            }
            let previous_bitmap = SelectObject(dc, bitmap);
            // Window coordinates keep working inside the buffer.
            let _ = OffsetViewportOrgEx(dc, -area.left(), -area.top(), None);
            Some(Self {
                dc,
                bitmap,
                previous_bitmap,
                area,
            })
        }
    }

    fn present(&self, target: HDC) {
        let area = self.area;
        let result = unsafe {
            let _ = SetViewportOrgEx(self.dc, 0, 0, None);
            BitBlt(
                target,
                area.left(),
                area.top(),
                area.width(),
                area.height(),
                self.dc,
                0,
                0,
                SRCCOPY,
            )
        };
        if let Err(e) = result {
            tracing::warn!(target: LOG_TARGET, error = %e, "BitBlt failed");
        }
    }
}

impl Drop for BackBuffer {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc, self.previous_bitmap);
            let _ = DeleteObject(self.bitmap);
            let _ = DeleteDC(self.dc);
        }
    }
}

/// Handle `WM_PAINT`: run `draw` against the invalid area of `hwnd`.
///
/// Drawing goes to a back buffer that is copied to the window in one blit.
/// When no back buffer can be created, `draw` paints the window directly.
pub fn paint(hwnd: HWND, draw: impl FnOnce(&mut GdiSurface)) {
    let mut ps = PAINTSTRUCT::default();
    let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
    if hdc.is_invalid() {
        tracing::warn!(target: LOG_TARGET, "BeginPaint failed");
        return;
    }

    let area = rect_from_win32(&ps.rcPaint);
    if !area.is_empty() {
        match BackBuffer::new(hdc, area) {
            Some(buffer) => {
                {
                    let mut surface = GdiSurface::new(buffer.dc, hwnd);
                    draw(&mut surface);
                }
                buffer.present(hdc);
            }
            None => {
                tracing::warn!(target: LOG_TARGET, ?area, "back buffer unavailable, painting directly");
                draw(&mut GdiSurface::new(hdc, hwnd));
            }
        }
    }

    unsafe {
        let _ = EndPaint(hwnd, &ps);
    }
}
