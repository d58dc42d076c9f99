//! Demo window with owner-drawn chrome.
//!
//! Usage: `horizon-chrome-demo [config.toml]`
//!
//! Logging is controlled with `RUST_LOG`, e.g.
//! `RUST_LOG=horizon_chrome_core::interaction=debug`.

use std::process::ExitCode;

use horizon_chrome::ChromeConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match ChromeConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(target: horizon_chrome::LOG_TARGET, "{e}");
                return ExitCode::FAILURE;
            }
        },
        None => ChromeConfig::default(),
    };

    match horizon_chrome::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: horizon_chrome::LOG_TARGET, "{e}");
            ExitCode::FAILURE
        }
    }
}
