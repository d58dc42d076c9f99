//! Platform-independent core of Horizon Chrome.
//!
//! Horizon Chrome replaces a window's native title bar and border with an
//! owner-drawn one while keeping every native window behavior: moving,
//! resizing, snapping, minimize, maximize, close and the system menu.
//!
//! The crate is split along three concerns:
//!
//! - **Geometry**: [`ChromeGeometry::resolve`] computes every chrome rectangle
//!   from the window size and maximized state.
//! - **Interaction**: [`dispatch`] feeds a [`ChromeEvent`] into the window's
//!   [`ChromeState`] and returns a [`Reply`] with the answer to the native
//!   message and the [`ChromeAction`]s to perform.
//! - **Rendering**: [`ChromeRenderer`] paints the chrome onto a [`Surface`].
//!
//! Nothing here talks to an operating system. A platform layer implements
//! [`WindowHost`] and [`Surface`], translates its messages into events and
//! executes the returned actions.
//!
//! # Example
//!
//! ```
//! use horizon_chrome_core::{
//!     dispatch, ChromeEvent, ChromeState, Disposition, HitRegion, Point,
//! };
//! # use horizon_chrome_core::{AutoHideEdges, Rect, WindowHost};
//! # struct Host;
//! # impl WindowHost for Host {
//! #     fn window_rect(&self) -> Rect { Rect::new(200, 200, 700, 500) }
//! #     fn is_maximized(&self) -> bool { false }
//! #     fn is_minimized(&self) -> bool { false }
//! #     fn cursor_pos(&self) -> Point { Point::ZERO }
//! #     fn work_area(&self) -> Option<Rect> { None }
//! #     fn autohide_edges(&self) -> Option<AutoHideEdges> { None }
//! #     fn frame_border(&self) -> i32 { 8 }
//! # }
//! # let host = Host;
//!
//! let mut state = ChromeState::default();
//! dispatch(Some(&mut state), &host, ChromeEvent::FocusChanged { focused: true });
//!
//! let reply = dispatch(
//!     Some(&mut state),
//!     &host,
//!     ChromeEvent::HitTest { point: Point::new(300, 16) },
//! );
//! assert_eq!(reply.disposition, Disposition::HitTest(HitRegion::Caption));
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod machine;
pub mod placement;
pub mod region;
pub mod registry;
pub mod render;
pub mod state;
pub mod types;

pub use config::{ChromeConfig, ChromeMetrics, ChromePalette, WindowSettings};
pub use error::{ChromeError, Result};
pub use event::{
    ChromeAction, ChromeEvent, Disposition, Reply, SettingKind, SizeKind, SystemMenuState,
    WindowCommand,
};
pub use geometry::{ButtonRects, ChromeGeometry};
pub use hit_test::hit_test;
pub use host::WindowHost;
pub use machine::dispatch;
pub use placement::{AutoHideEdges, clamp_sizing, compensate_snap, maximize_target};
pub use region::{CaptionButton, HitRegion, ResizeEdge};
pub use registry::ChromeRegistry;
pub use render::{
    ButtonVisual, ChromeRenderer, DisplayList, DrawCommand, IconSource, PaintState, Surface,
    fit_text,
};
pub use state::ChromeState;
pub use types::{Color, Point, Rect, Size};

/// Re-export of the cursor shape type returned by [`HitRegion::cursor`].
pub use cursor_icon::CursorIcon;
