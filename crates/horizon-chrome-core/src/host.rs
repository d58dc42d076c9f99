//! Queries the state machine makes against the windowing system.

use crate::placement::AutoHideEdges;
use crate::types::{Point, Rect};

/// Read-only window services provided by the platform layer.
///
/// Everything the state machine needs to know about the window comes through
/// this trait; everything it wants done comes back as
/// [`ChromeAction`](crate::ChromeAction)s. Queries that can fail return
/// `Option`, and a `None` makes the state machine skip the adjustment that
/// depended on it.
pub trait WindowHost {
    /// Window rectangle in screen coordinates, frame included.
    fn window_rect(&self) -> Rect;

    fn is_maximized(&self) -> bool;

    fn is_minimized(&self) -> bool;

    /// Pointer position in screen coordinates.
    fn cursor_pos(&self) -> Point;

    /// Work area of the monitor the window is on.
    fn work_area(&self) -> Option<Rect>;

    /// Monitor edges with an auto-hide taskbar.
    fn autohide_edges(&self) -> Option<AutoHideEdges>;

    /// Thickness of the invisible native resize frame.
    fn frame_border(&self) -> i32;
}
