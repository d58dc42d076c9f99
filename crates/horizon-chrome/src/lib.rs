//! Horizon Chrome - owner-drawn window chrome for Win32.
//!
//! This crate hosts the platform layer: it registers a window class whose
//! window procedure translates native non-client messages into
//! [`ChromeEvent`](horizon_chrome_core::ChromeEvent)s, runs them through the
//! core state machine and carries out the returned actions. Painting goes
//! through a GDI implementation of [`Surface`](horizon_chrome_core::Surface).
//!
//! All platform-independent behavior lives in [`horizon_chrome_core`], which
//! is re-exported here.
//!
//! # Example
//!
//! ```no_run
//! use horizon_chrome::ChromeConfig;
//!
//! fn main() -> Result<(), horizon_chrome::Win32Error> {
//!     let config = ChromeConfig::default();
//!     horizon_chrome::run(&config)
//! }
//! ```

pub mod error;

#[cfg(target_os = "windows")]
pub mod win32;

pub use error::{Result, Win32Error};
pub use horizon_chrome_core::{ChromeConfig, ChromeMetrics, ChromePalette, WindowSettings};

pub use horizon_chrome_core;

/// Tracing target for the Win32 backend.
pub const LOG_TARGET: &str = "horizon_chrome::win32";

/// Create the chrome window described by `config` and run its message loop
/// until the window is closed.
pub fn run(config: &ChromeConfig) -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        win32::run(config)
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = config;
        Err(Win32Error::Unsupported)
    }
}
