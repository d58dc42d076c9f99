//! Error types for Horizon Chrome.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or driving the chrome.
///
/// Interaction and painting never fail: missing state and failed host queries
/// degrade to neutral behavior. Errors only surface from configuration loading
/// and from decoding raw values handed over by a platform layer.
#[derive(Error, Debug)]
pub enum ChromeError {
    /// Reading a configuration file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML for [`ChromeConfig`](crate::ChromeConfig).
    #[error("invalid chrome configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid chrome configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    /// A color string is not of the form `#rrggbb`.
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    /// A raw caption button code does not name a button.
    #[error("invalid caption button code {0}")]
    InvalidButton(u8),
}

/// A specialized Result type for chrome operations.
pub type Result<T> = std::result::Result<T, ChromeError>;
