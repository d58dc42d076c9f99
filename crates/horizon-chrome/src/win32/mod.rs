//! Win32 backend.
//!
//! The window procedure keeps one [`ChromeState`](horizon_chrome_core::ChromeState)
//! per window in a thread-local registry, created on `WM_NCCREATE` and
//! dropped on `WM_NCDESTROY`. Every chrome-relevant message becomes a
//! [`ChromeEvent`](horizon_chrome_core::ChromeEvent); the reply's actions run
//! after the registry borrow is released, so actions that re-enter the
//! window procedure (the system menu, a window move) see consistent state.

pub mod codes;
pub mod gdi;
pub mod host;
mod window;
mod window_proc;

pub use gdi::GdiSurface;
pub use host::Win32Host;
pub use window::{WindowClass, run, run_message_loop};
