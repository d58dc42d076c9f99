//! Window class registration, window creation and the message loop.

use horizon_chrome_core::ChromeConfig;
use windows::Win32::Foundation::{HINSTANCE, HWND};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_VREDRAW, CreateWindowExW, DispatchMessageW, GetMessageW, IDC_ARROW,
    LoadCursorW, MSG, RegisterClassExW, SW_SHOW, ShowWindow, TranslateMessage, UnregisterClassW,
    WINDOW_EX_STYLE, WNDCLASSEXW, WS_MAXIMIZEBOX, WS_MINIMIZEBOX, WS_SYSMENU, WS_THICKFRAME,
};
use windows::core::{HSTRING, PCWSTR, w};

use super::window_proc::window_proc;
use crate::error::{Result, Win32Error};
use crate::LOG_TARGET;

const CLASS_NAME: PCWSTR = w!("HorizonChromeWindow");

/// The registered chrome window class. Unregistered on drop.
pub struct WindowClass {
    instance: HINSTANCE,
}

impl WindowClass {
    pub fn register() -> Result<Self> {
        let instance: HINSTANCE = unsafe { GetModuleHandleW(None) }
            .map_err(|e| Win32Error::platform("GetModuleHandleW", e))?
            .into();
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }
            .map_err(|e| Win32Error::platform("LoadCursorW", e))?;

        let class = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(window_proc),
            hInstance: instance,
            hCursor: cursor,
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };
        if unsafe { RegisterClassExW(&class) } == 0 {
            return Err(Win32Error::platform(
                "RegisterClassExW",
                windows::core::Error::from_win32(),
            ));
        }
        tracing::debug!(target: LOG_TARGET, "window class registered");
        Ok(Self { instance })
    }

    /// Create a chrome window described by `config`.
    ///
    /// `config` must outlive `WM_NCCREATE`, which copies what it needs.
    pub fn create_window(&self, config: &ChromeConfig) -> Result<HWND> {
        let settings = &config.window;
        let title = HSTRING::from(settings.title.as_str());
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                CLASS_NAME,
                &title,
                WS_THICKFRAME | WS_SYSMENU | WS_MAXIMIZEBOX | WS_MINIMIZEBOX,
                settings.x,
                settings.y,
                settings.width,
                settings.height,
                None,
                None,
                self.instance,
                Some(config as *const ChromeConfig as *const _),
            )
        }
        .map_err(|e| Win32Error::WindowCreation(e.to_string()))?;

        tracing::info!(
            target: LOG_TARGET,
            title = %settings.title,
            width = settings.width,
            height = settings.height,
            "chrome window created"
        );
        Ok(hwnd)
    }
}

impl Drop for WindowClass {
    fn drop(&mut self) {
        if let Err(e) = unsafe { UnregisterClassW(CLASS_NAME, self.instance) } {
            tracing::warn!(target: LOG_TARGET, error = %e, "UnregisterClassW failed");
        }
    }
}

/// Run the message loop until `WM_QUIT`.
pub fn run_message_loop() {
    let mut message = MSG::default();
    loop {
        let status = unsafe { GetMessageW(&mut message, None, 0, 0) };
        match status.0 {
            0 => break,
            -1 => {
                tracing::error!(
                    target: LOG_TARGET,
                    error = %windows::core::Error::from_win32(),
                    "GetMessageW failed"
                );
                break;
            }
            _ => unsafe {
                let _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            },
        }
    }
}

/// Create the chrome window described by `config`, show it and pump messages
/// until it is closed.
pub fn run(config: &ChromeConfig) -> Result<()> {
    config.validate()?;

    let class = WindowClass::register()?;
    let hwnd = class.create_window(config)?;
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
    }

    run_message_loop();
    drop(class);
    tracing::info!(target: LOG_TARGET, "message loop finished");
    Ok(())
}
