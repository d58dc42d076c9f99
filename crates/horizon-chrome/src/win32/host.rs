//! Window queries answered by Win32.

use horizon_chrome_core::{AutoHideEdges, Point, Rect, WindowHost};
use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};
use windows::Win32::UI::Shell::{
    ABE_BOTTOM, ABE_LEFT, ABE_RIGHT, ABE_TOP, ABM_GETAUTOHIDEBAREX, APPBARDATA, SHAppBarMessage,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, GetWindowRect, IsIconic, IsZoomed, SM_CXPADDEDBORDER,
    SM_CXSIZEFRAME,
};

use super::codes::rect_from_win32;
use crate::LOG_TARGET;

/// [`WindowHost`] backed by a live window handle.
#[derive(Debug, Clone, Copy)]
pub struct Win32Host {
    hwnd: HWND,
}

impl Win32Host {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub(crate) fn monitor_info(&self) -> Option<MONITORINFO> {
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        let ok = unsafe {
            let monitor: HMONITOR = MonitorFromWindow(self.hwnd, MONITOR_DEFAULTTONEAREST);
            GetMonitorInfoW(monitor, &mut info).as_bool()
        };
        if ok {
            Some(info)
        } else {
            tracing::warn!(target: LOG_TARGET, "GetMonitorInfoW failed");
            None
        }
    }
}

impl WindowHost for Win32Host {
    fn window_rect(&self) -> Rect {
        let mut rect = RECT::default();
        match unsafe { GetWindowRect(self.hwnd, &mut rect) } {
            Ok(()) => rect_from_win32(&rect),
            Err(e) => {
                tracing::warn!(target: LOG_TARGET, error = %e, "GetWindowRect failed");
                Rect::ZERO
            }
        }
    }

    fn is_maximized(&self) -> bool {
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    fn is_minimized(&self) -> bool {
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    fn cursor_pos(&self) -> Point {
        let mut point = POINT::default();
        if let Err(e) = unsafe { GetCursorPos(&mut point) } {
            tracing::warn!(target: LOG_TARGET, error = %e, "GetCursorPos failed");
        }
        Point::new(point.x, point.y)
    }

    fn work_area(&self) -> Option<Rect> {
        self.monitor_info().map(|info| rect_from_win32(&info.rcWork))
    }

    fn autohide_edges(&self) -> Option<AutoHideEdges> {
        let monitor = self.monitor_info()?.rcMonitor;
        let has_autohide_bar = |edge: u32| {
            let mut data = APPBARDATA {
                cbSize: std::mem::size_of::<APPBARDATA>() as u32,
                uEdge: edge,
                rc: monitor,
                ..Default::default()
            };
            unsafe { SHAppBarMessage(ABM_GETAUTOHIDEBAREX, &mut data) != 0 }
        };

        Some(AutoHideEdges {
            top: has_autohide_bar(ABE_TOP),
            bottom: has_autohide_bar(ABE_BOTTOM),
            left: has_autohide_bar(ABE_LEFT),
            right: has_autohide_bar(ABE_RIGHT),
        })
    }

    fn frame_border(&self) -> i32 {
        unsafe { GetSystemMetrics(SM_CXSIZEFRAME) + GetSystemMetrics(SM_CXPADDEDBORDER) }
    }
}
