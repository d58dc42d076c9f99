//! Conversions between Win32 message values and core types.

use horizon_chrome_core::{CursorIcon, HitRegion, Point, Rect, ResizeEdge};
use windows::Win32::Foundation::{LPARAM, RECT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCAPTION, HTCLIENT, HTCLOSE, HTLEFT, HTMAXBUTTON,
    HTMINBUTTON, HTNOWHERE, HTRIGHT, HTSYSMENU, HTTOP, HTTOPLEFT, HTTOPRIGHT, IDC_ARROW,
    IDC_SIZENESW, IDC_SIZENS, IDC_SIZENWSE, IDC_SIZEWE, WMSZ_BOTTOM, WMSZ_BOTTOMLEFT,
    WMSZ_BOTTOMRIGHT, WMSZ_LEFT, WMSZ_RIGHT, WMSZ_TOP, WMSZ_TOPLEFT, WMSZ_TOPRIGHT,
};
use windows::core::PCWSTR;

/// The `HT*` code answering `WM_NCHITTEST` for a region.
pub fn hit_code(region: HitRegion) -> u32 {
    match region {
        HitRegion::Nowhere => HTNOWHERE,
        HitRegion::Client => HTCLIENT,
        HitRegion::Caption => HTCAPTION,
        HitRegion::SysMenu => HTSYSMENU,
        HitRegion::MinButton => HTMINBUTTON,
        HitRegion::MaxButton => HTMAXBUTTON,
        HitRegion::Close => HTCLOSE,
        HitRegion::Border(edge) => match edge {
            ResizeEdge::Top => HTTOP,
            ResizeEdge::Bottom => HTBOTTOM,
            ResizeEdge::Left => HTLEFT,
            ResizeEdge::Right => HTRIGHT,
            ResizeEdge::TopLeft => HTTOPLEFT,
            ResizeEdge::TopRight => HTTOPRIGHT,
            ResizeEdge::BottomLeft => HTBOTTOMLEFT,
            ResizeEdge::BottomRight => HTBOTTOMRIGHT,
        },
    }
}

/// The region named by an `HT*` code, as carried in the `wParam` of
/// non-client mouse messages. Codes the chrome never reports map to
/// [`HitRegion::Nowhere`].
pub fn region_from_hit_code(code: u32) -> HitRegion {
    match code {
        HTCLIENT => HitRegion::Client,
        HTCAPTION => HitRegion::Caption,
        HTSYSMENU => HitRegion::SysMenu,
        HTMINBUTTON => HitRegion::MinButton,
        HTMAXBUTTON => HitRegion::MaxButton,
        HTCLOSE => HitRegion::Close,
        HTTOP => HitRegion::Border(ResizeEdge::Top),
        HTBOTTOM => HitRegion::Border(ResizeEdge::Bottom),
        HTLEFT => HitRegion::Border(ResizeEdge::Left),
        HTRIGHT => HitRegion::Border(ResizeEdge::Right),
        HTTOPLEFT => HitRegion::Border(ResizeEdge::TopLeft),
        HTTOPRIGHT => HitRegion::Border(ResizeEdge::TopRight),
        HTBOTTOMLEFT => HitRegion::Border(ResizeEdge::BottomLeft),
        HTBOTTOMRIGHT => HitRegion::Border(ResizeEdge::BottomRight),
        _ => HitRegion::Nowhere,
    }
}

/// The edge named by the `wParam` of `WM_SIZING`.
pub fn sizing_edge(code: u32) -> Option<ResizeEdge> {
    match code {
        WMSZ_LEFT => Some(ResizeEdge::Left),
        WMSZ_RIGHT => Some(ResizeEdge::Right),
        WMSZ_TOP => Some(ResizeEdge::Top),
        WMSZ_TOPLEFT => Some(ResizeEdge::TopLeft),
        WMSZ_TOPRIGHT => Some(ResizeEdge::TopRight),
        WMSZ_BOTTOM => Some(ResizeEdge::Bottom),
        WMSZ_BOTTOMLEFT => Some(ResizeEdge::BottomLeft),
        WMSZ_BOTTOMRIGHT => Some(ResizeEdge::BottomRight),
        _ => None,
    }
}

/// The system cursor for a cursor shape.
pub fn system_cursor(icon: CursorIcon) -> PCWSTR {
    match icon {
        CursorIcon::NsResize => IDC_SIZENS,
        CursorIcon::EwResize => IDC_SIZEWE,
        CursorIcon::NwseResize => IDC_SIZENWSE,
        CursorIcon::NeswResize => IDC_SIZENESW,
        _ => IDC_ARROW,
    }
}

/// Point unpacked from an `LPARAM` (signed 16-bit coordinates).
pub fn point_from_lparam(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xffff) as u16 as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xffff) as u16 as i16 as i32;
    Point::new(x, y)
}

/// Screen point packed the way mouse messages carry it.
pub fn point_to_lparam(point: Point) -> LPARAM {
    let packed = ((point.y as u16 as u32) << 16) | point.x as u16 as u32;
    LPARAM(packed as i32 as isize)
}

/// Low word of a `WPARAM`.
pub fn loword(wparam: WPARAM) -> u32 {
    (wparam.0 & 0xffff) as u32
}

pub fn rect_from_win32(rect: &RECT) -> Rect {
    Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
}

pub fn rect_to_win32(rect: Rect) -> RECT {
    RECT {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Convert a screen rectangle to the workspace coordinates window placement
/// uses, which are relative to the monitor's work area.
pub fn screen_to_workspace(rect: Rect, monitor: &RECT, work: &RECT) -> Rect {
    rect.offset(monitor.left - work.left, monitor.top - work.top)
}
