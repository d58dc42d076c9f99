//! Logging conventions for Horizon Chrome.
//!
//! Horizon Chrome uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; applications do:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_chrome_core::interaction=debug")
//!     .init();
//! ```
//!
//! Hit testing runs on every pointer move over the window, so it only logs at
//! `trace`. State transitions (hover, focus, snap) log at `debug`, fallbacks
//! taken after a failed platform query log at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_chrome_core";
    /// Hover, press, focus and mouse-leave transitions.
    pub const INTERACTION: &str = "horizon_chrome_core::interaction";
    /// Hit-test resolution.
    pub const HIT_TEST: &str = "horizon_chrome_core::hit_test";
    /// Maximize geometry, snap compensation and work-area changes.
    pub const PLACEMENT: &str = "horizon_chrome_core::placement";
    /// Chrome painting.
    pub const RENDER: &str = "horizon_chrome_core::render";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_chrome_core::config";
}

/// Span names used for tracing.
pub mod span_names {
    /// One event passing through the state machine.
    pub const DISPATCH: &str = "horizon_chrome::dispatch";
    /// One paint of the chrome.
    pub const PAINT: &str = "horizon_chrome::paint";
}
