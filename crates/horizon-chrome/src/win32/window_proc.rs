//! The window procedure: native messages in, core events through, actions out.

use std::cell::RefCell;
use std::ffi::c_void;

use horizon_chrome_core::{
    ChromeAction, ChromeConfig, ChromeEvent, ChromeRegistry, ChromeState, Disposition,
    IconSource, Point, Reply, SettingKind, SizeKind, SystemMenuState, WindowCommand,
    WindowHost,
};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{InvalidateRect, RDW_INVALIDATE, RDW_UPDATENOW, RedrawWindow};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    ReleaseCapture, TME_LEAVE, TME_NONCLIENT, TRACKMOUSEEVENT, TrackMouseEvent,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CREATESTRUCTW, DefWindowProcW, EnableMenuItem, GetSystemMenu, GetSystemMetrics,
    GetWindowPlacement, GetWindowTextLengthW, GetWindowTextW, HTCAPTION, LoadCursorW,
    MENU_ITEM_FLAGS, MF_BYCOMMAND, MF_ENABLED, MF_GRAYED, MINMAXINFO, PostMessageW,
    PostQuitMessage, SC_CLOSE, SC_MAXIMIZE, SC_MINIMIZE, SC_MOVE, SC_RESTORE, SC_SIZE,
    SIZE_MAXIMIZED, SIZE_MINIMIZED, SIZE_RESTORED, SM_CXSMICON, SPI_SETWORKAREA,
    SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SendMessageW,
    SetCursor, SetWindowPlacement, SetWindowPos, TPM_LEFTALIGN, TPM_RETURNCMD, TrackPopupMenuEx,
    WA_INACTIVE, WINDOWPLACEMENT, WINDOWPOS, WM_ACTIVATE, WM_CAPTURECHANGED, WM_CLOSE, WM_CREATE,
    WM_DESTROY, WM_DISPLAYCHANGE, WM_ENTERSIZEMOVE, WM_ERASEBKGND, WM_EXITSIZEMOVE,
    WM_GETMINMAXINFO, WM_LBUTTONDOWN, WM_MOUSEMOVE, WM_NCCALCSIZE, WM_NCCREATE, WM_NCDESTROY,
    WM_NCHITTEST, WM_NCLBUTTONDOWN, WM_NCLBUTTONUP, WM_NCMOUSELEAVE, WM_NCMOUSEMOVE,
    WM_NCRBUTTONDOWN, WM_PAINT, WM_SETCURSOR, WM_SETTINGCHANGE, WM_SIZE, WM_SIZING,
    WM_SYSCOMMAND, WM_WINDOWPOSCHANGED, WM_WINDOWPOSCHANGING,
};

use super::codes::{
    hit_code, loword, point_from_lparam, point_to_lparam, rect_from_win32, rect_to_win32,
    region_from_hit_code, screen_to_workspace, sizing_edge, system_cursor,
};
use super::gdi;
use super::host::Win32Host;
use crate::LOG_TARGET;

thread_local! {
    /// Chrome state of every window owned by this thread, keyed by `HWND`.
    static REGISTRY: RefCell<ChromeRegistry<isize>> = RefCell::new(ChromeRegistry::new());
}

fn key(hwnd: HWND) -> isize {
    hwnd.0 as isize
}

/// `WINDOWPOS.flags` values seen at the start of a snap gesture.
///
/// These combinations are undocumented and were observed on Windows 10 and
/// 11; other versions may use different ones.
const SNAP_BEGIN_FLAGS: [u32; 2] = [0x0030_8020, 0x0030_0204];

/// Whether a `WM_WINDOWPOSCHANGING` with these flags starts a snap gesture.
pub(crate) fn is_snap_begin(flags: u32) -> bool {
    SNAP_BEGIN_FLAGS.contains(&flags)
}

/// Run `event` through the state of `hwnd`.
///
/// The registry borrow ends before this returns, so the caller can execute
/// actions that re-enter the window procedure.
fn dispatch(hwnd: HWND, event: ChromeEvent) -> Reply {
    let host = Win32Host::new(hwnd);
    REGISTRY.with(|registry| match registry.try_borrow_mut() {
        Ok(mut registry) => registry.dispatch(key(hwnd), &host, event),
        Err(_) => {
            tracing::warn!(target: LOG_TARGET, ?event, "re-entrant dispatch ignored");
            Reply::neutral()
        }
    })
}

fn snapshot(hwnd: HWND) -> Option<ChromeState> {
    REGISTRY.with(|registry| {
        registry
            .try_borrow()
            .ok()
            .and_then(|registry| registry.get(key(hwnd)).cloned())
    })
}

/// Translate a message into a chrome event. `None` for messages the chrome
/// does not observe.
fn translate(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<ChromeEvent> {
    let to_window = |screen: Point| {
        let origin = Win32Host::new(hwnd).window_rect().origin;
        screen.offset(-origin.x, -origin.y)
    };

    let event = match msg {
        WM_CREATE => ChromeEvent::Created,
        WM_DESTROY => ChromeEvent::Destroyed,
        WM_ACTIVATE => ChromeEvent::FocusChanged {
            focused: loword(wparam) != WA_INACTIVE,
        },
        WM_NCHITTEST => ChromeEvent::HitTest {
            point: to_window(point_from_lparam(lparam)),
        },
        WM_NCMOUSEMOVE => ChromeEvent::NcPointerMove {
            point: to_window(point_from_lparam(lparam)),
        },
        WM_NCMOUSELEAVE => ChromeEvent::NcPointerLeave,
        WM_MOUSEMOVE => ChromeEvent::ClientPointerMove,
        WM_NCLBUTTONDOWN => ChromeEvent::NcButtonDown {
            point: to_window(point_from_lparam(lparam)),
            hit: region_from_hit_code(wparam.0 as u32),
        },
        WM_NCLBUTTONUP => ChromeEvent::NcButtonUp {
            hit: region_from_hit_code(wparam.0 as u32),
        },
        // The client area covers the whole window, so client and window
        // coordinates agree.
        WM_LBUTTONDOWN => ChromeEvent::ClientButtonDown {
            point: point_from_lparam(lparam),
        },
        WM_NCRBUTTONDOWN => ChromeEvent::SystemMenuRequested {
            screen_point: point_from_lparam(lparam),
            hit: region_from_hit_code(wparam.0 as u32),
        },
        WM_CAPTURECHANGED => ChromeEvent::CaptureLost,
        WM_GETMINMAXINFO => ChromeEvent::MinMaxInfo,
        WM_SIZING => {
            let edge = sizing_edge(wparam.0 as u32)?;
            let proposed = unsafe { (lparam.0 as *const RECT).as_ref()? };
            ChromeEvent::Sizing {
                edge,
                proposed: rect_from_win32(proposed),
            }
        }
        WM_ENTERSIZEMOVE => ChromeEvent::EnterSizeMove,
        WM_EXITSIZEMOVE => ChromeEvent::ExitSizeMove,
        WM_SIZE => {
            let kind = match wparam.0 as u32 {
                SIZE_MAXIMIZED => SizeKind::Maximized,
                SIZE_RESTORED => SizeKind::Restored,
                SIZE_MINIMIZED => SizeKind::Minimized,
                _ => return None,
            };
            ChromeEvent::SizeChanged { kind }
        }
        WM_WINDOWPOSCHANGING => {
            let pos = unsafe { (lparam.0 as *const WINDOWPOS).as_ref()? };
            ChromeEvent::PositionChanging {
                snap_begin: is_snap_begin(pos.flags.0),
            }
        }
        WM_WINDOWPOSCHANGED => ChromeEvent::PositionChanged {
            rect: Win32Host::new(hwnd).window_rect(),
        },
        WM_SETTINGCHANGE => ChromeEvent::SettingsChanged {
            kind: if wparam.0 as u32 == SPI_SETWORKAREA.0 {
                SettingKind::WorkArea
            } else {
                SettingKind::Other
            },
        },
        WM_DISPLAYCHANGE => ChromeEvent::SettingsChanged {
            kind: SettingKind::Display,
        },
        WM_SYSCOMMAND => {
            let origin = Win32Host::new(hwnd).cursor_pos();
            let command = match (wparam.0 as u32) & 0xfff0 {
                SC_CLOSE => WindowCommand::Close,
                SC_MINIMIZE => WindowCommand::Minimize,
                SC_MAXIMIZE => WindowCommand::Maximize { origin },
                SC_RESTORE => WindowCommand::Restore { origin },
                _ => return None,
            };
            ChromeEvent::CommandRequested(command)
        }
        _ => return None,
    };
    Some(event)
}

/// Window procedure of the chrome window class.
pub(crate) extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_NCCREATE => {
            on_nc_create(hwnd, lparam);
            return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
        }
        // The whole window is client area; the chrome draws its own frame.
        WM_NCCALCSIZE if wparam.0 != 0 => return LRESULT(0),
        WM_ERASEBKGND => return LRESULT(1),
        WM_PAINT => {
            if on_paint(hwnd) {
                return LRESULT(0);
            }
        }
        WM_SETCURSOR if HWND(wparam.0 as *mut c_void) == hwnd => {
            if on_set_cursor(lparam) {
                return LRESULT(1);
            }
        }
        WM_NCDESTROY => {
            REGISTRY.with(|registry| {
                if let Ok(mut registry) = registry.try_borrow_mut() {
                    registry.remove(key(hwnd));
                }
            });
        }
        _ => {}
    }

    let Some(event) = translate(hwnd, msg, wparam, lparam) else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };
    let reply = dispatch(hwnd, event);
    execute(hwnd, &reply.actions);

    if msg == WM_DESTROY {
        unsafe { PostQuitMessage(0) };
        return LRESULT(0);
    }

    match reply.disposition {
        Disposition::Default => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        Disposition::Handled => LRESULT(0),
        Disposition::HitTest(region) => LRESULT(hit_code(region) as isize),
        Disposition::MinTrackSize(size) => {
            if let Some(info) = unsafe { (lparam.0 as *mut MINMAXINFO).as_mut() } {
                info.ptMinTrackSize.x = size.width;
                info.ptMinTrackSize.y = size.height;
            }
            LRESULT(0)
        }
        Disposition::Rect(rect) => {
            if let Some(target) = unsafe { (lparam.0 as *mut RECT).as_mut() } {
                *target = rect_to_win32(rect);
            }
            LRESULT(1)
        }
    }
}

fn on_nc_create(hwnd: HWND, lparam: LPARAM) {
    let config = unsafe {
        (lparam.0 as *const CREATESTRUCTW)
            .as_ref()
            .and_then(|create| (create.lpCreateParams as *const ChromeConfig).as_ref())
    };
    let small_icon = unsafe { GetSystemMetrics(SM_CXSMICON) };

    let mut state = config.map(ChromeState::from_config).unwrap_or_default();
    if small_icon > 0 {
        state.metrics = state.metrics.with_small_icon_size(small_icon);
    }

    REGISTRY.with(|registry| match registry.try_borrow_mut() {
        Ok(mut registry) => registry.insert(key(hwnd), state),
        Err(_) => tracing::warn!(target: LOG_TARGET, "registry busy, window has no chrome"),
    });
}

fn window_title(hwnd: HWND) -> String {
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return String::new();
    }
    let mut buffer = vec![0u16; length as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buffer) };
    String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
}

/// Paint the chrome from a snapshot of the window's state. Returns `false`
/// when the window has no state and default painting should run.
fn on_paint(hwnd: HWND) -> bool {
    let Some(state) = snapshot(hwnd) else {
        return false;
    };
    let host = Win32Host::new(hwnd);
    let geometry = state.geometry(&host);
    let title = window_title(hwnd);
    let paint_state = state.paint_state(host.is_maximized(), &title, IconSource::Window);
    let renderer = state.renderer();

    gdi::paint(hwnd, |surface| renderer.paint(surface, &geometry, &paint_state));
    true
}

/// Set the cursor for the hit code carried in the low word of `lparam`.
fn on_set_cursor(lparam: LPARAM) -> bool {
    let region = region_from_hit_code((lparam.0 & 0xffff) as u32);
    if !region.is_resize() {
        return false;
    }
    match unsafe { LoadCursorW(None, system_cursor(region.cursor())) } {
        Ok(cursor) => {
            unsafe { SetCursor(cursor) };
            true
        }
        Err(e) => {
            tracing::warn!(target: LOG_TARGET, error = %e, "LoadCursorW failed");
            false
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

fn execute(hwnd: HWND, actions: &[ChromeAction]) {
    for &action in actions {
        if let Err(e) = perform(hwnd, action) {
            tracing::warn!(target: LOG_TARGET, ?action, error = %e, "chrome action failed");
        }
    }
}

fn perform(hwnd: HWND, action: ChromeAction) -> windows::core::Result<()> {
    unsafe {
        match action {
            ChromeAction::Invalidate(rect) => {
                let rect = rect_to_win32(rect);
                InvalidateRect(hwnd, Some(&rect as *const RECT), false).ok()
            }
            ChromeAction::TrackMouseLeave => {
                let mut track = TRACKMOUSEEVENT {
                    cbSize: std::mem::size_of::<TRACKMOUSEEVENT>() as u32,
                    dwFlags: TME_LEAVE | TME_NONCLIENT,
                    hwndTrack: hwnd,
                    dwHoverTime: 0,
                };
                TrackMouseEvent(&mut track)
            }
            ChromeAction::PostCommand(command) => post_command(hwnd, command),
            ChromeAction::BeginDrag { screen_point } => {
                ReleaseCapture()?;
                SendMessageW(
                    hwnd,
                    WM_SYSCOMMAND,
                    WPARAM((SC_MOVE | HTCAPTION) as usize),
                    point_to_lparam(screen_point),
                );
                Ok(())
            }
            ChromeAction::ShowSystemMenu { screen_point, menu } => {
                show_system_menu(hwnd, screen_point, menu)
            }
            ChromeAction::SetWindowRect(rect) => SetWindowPos(
                hwnd,
                None,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
                SWP_NOZORDER | SWP_NOACTIVATE,
            ),
            ChromeAction::RestorePlacement(rect) => {
                let mut placement = WINDOWPLACEMENT {
                    length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
                    ..Default::default()
                };
                GetWindowPlacement(hwnd, &mut placement)?;
                let normal = match Win32Host::new(hwnd).monitor_info() {
                    Some(info) => screen_to_workspace(rect, &info.rcMonitor, &info.rcWork),
                    None => rect,
                };
                placement.rcNormalPosition = rect_to_win32(normal);
                SetWindowPlacement(hwnd, &placement)
            }
            ChromeAction::RefreshFrame => SetWindowPos(
                hwnd,
                None,
                0,
                0,
                0,
                0,
                SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            ),
            ChromeAction::Redraw => {
                RedrawWindow(hwnd, None, None, RDW_INVALIDATE | RDW_UPDATENOW).ok()
            }
        }
    }
}

fn post_command(hwnd: HWND, command: WindowCommand) -> windows::core::Result<()> {
    let (msg, wparam, lparam) = match command {
        WindowCommand::Close => (WM_CLOSE, 0, LPARAM(0)),
        WindowCommand::Minimize => (WM_SYSCOMMAND, SC_MINIMIZE, LPARAM(0)),
        WindowCommand::Maximize { origin } => (WM_SYSCOMMAND, SC_MAXIMIZE, point_to_lparam(origin)),
        WindowCommand::Restore { origin } => (WM_SYSCOMMAND, SC_RESTORE, point_to_lparam(origin)),
    };
    tracing::debug!(target: LOG_TARGET, ?command, "posting window command");
    unsafe { PostMessageW(hwnd, msg, WPARAM(wparam as usize), lparam) }
}

fn menu_flags(enabled: bool) -> MENU_ITEM_FLAGS {
    MF_BYCOMMAND | if enabled { MF_ENABLED } else { MF_GRAYED }
}

fn show_system_menu(
    hwnd: HWND,
    screen_point: Point,
    menu: SystemMenuState,
) -> windows::core::Result<()> {
    let command = unsafe {
        let hmenu = GetSystemMenu(hwnd, false);
        if hmenu.is_invalid() {
            tracing::warn!(target: LOG_TARGET, "window has no system menu");
            return Ok(());
        }
        let _ = EnableMenuItem(hmenu, SC_MAXIMIZE, menu_flags(menu.maximize_enabled));
        let _ = EnableMenuItem(hmenu, SC_RESTORE, menu_flags(menu.restore_enabled));
        let _ = EnableMenuItem(hmenu, SC_SIZE, menu_flags(menu.size_enabled));

        TrackPopupMenuEx(
            hmenu,
            (TPM_LEFTALIGN | TPM_RETURNCMD).0,
            screen_point.x,
            screen_point.y,
            hwnd,
            None,
        )
        .0
    };

    if command == 0 {
        return Ok(());
    }
    tracing::debug!(target: LOG_TARGET, command, "system menu command chosen");
    unsafe { PostMessageW(hwnd, WM_SYSCOMMAND, WPARAM(command as usize), LPARAM(0)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_begin_flags() {
        assert!(is_snap_begin(0x0030_8020));
        assert!(is_snap_begin(0x0030_0204));
        assert!(!is_snap_begin(0));
        assert!(!is_snap_begin(SWP_NOZORDER.0 | SWP_NOACTIVATE.0));
    }

    #[test]
    fn test_menu_flags() {
        assert_eq!(menu_flags(true), MF_BYCOMMAND | MF_ENABLED);
        assert_eq!(menu_flags(false), MF_BYCOMMAND | MF_GRAYED);
    }
}
