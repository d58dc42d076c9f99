//! Error types for the Win32 backend.

use horizon_chrome_core::ChromeError;
use thiserror::Error;

/// Errors that can occur while setting up or running a chrome window.
///
/// Failures inside the window procedure are never returned: they are logged
/// and the message falls back to default handling.
#[derive(Error, Debug)]
pub enum Win32Error {
    /// The chrome configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ChromeError),

    /// A Win32 call failed.
    #[cfg(target_os = "windows")]
    #[error("{operation} failed: {source}")]
    Platform {
        operation: &'static str,
        #[source]
        source: windows::core::Error,
    },

    /// The window could not be created.
    #[error("failed to create window: {0}")]
    WindowCreation(String),

    /// No native backend exists for the current platform.
    #[error("no window backend for this platform")]
    Unsupported,
}

impl Win32Error {
    /// Wrap a Win32 error with the name of the call that produced it.
    #[cfg(target_os = "windows")]
    pub fn platform(operation: &'static str, source: windows::core::Error) -> Self {
        Self::Platform { operation, source }
    }
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, Win32Error>;
