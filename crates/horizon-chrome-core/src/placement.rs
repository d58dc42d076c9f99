//! Maximize geometry and interactive sizing.
//!
//! A window without a native frame is maximized to the whole monitor by the
//! window manager, covering the taskbar. These helpers compute the rectangle
//! the window should really occupy.

use crate::region::ResizeEdge;
use crate::types::{Rect, Size};

/// Monitor edges that carry an auto-hide taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoHideEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl AutoHideEdges {
    /// No auto-hide taskbar on any edge.
    pub const NONE: Self = Self {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    /// Whether any edge hides a taskbar.
    pub const fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Rectangle a maximized window should cover.
///
/// This is the monitor work area, pulled in by one pixel on every edge that
/// hosts an auto-hide taskbar. A window covering that pixel would hide the
/// strip the taskbar needs to detect the pointer and slide back in.
pub fn maximize_target(work_area: Rect, autohide: AutoHideEdges) -> Rect {
    let inset = |hidden: bool| i32::from(hidden);
    work_area.adjust(
        inset(autohide.left),
        inset(autohide.top),
        -inset(autohide.right),
        -inset(autohide.bottom),
    )
}

/// Correct the rectangle reported after a snap-to-maximize gesture.
///
/// The window manager reports a snapped window as if the invisible native
/// resize frame was still present, so the rectangle overhangs the monitor by
/// `frame_border` on each side. The result is the reported rectangle with the
/// frame removed, clamped into `target`.
pub fn compensate_snap(reported: Rect, frame_border: i32, target: Rect) -> Rect {
    reported
        .deflate(frame_border.max(0))
        .intersect(&target)
        .unwrap_or(target)
}

/// Enforce a minimum size on a rectangle proposed during interactive resize.
///
/// The edge opposite the dragged one stays anchored.
pub fn clamp_sizing(proposed: Rect, edge: ResizeEdge, min: Size) -> Rect {
    let mut left = proposed.left();
    let mut top = proposed.top();
    let mut right = proposed.right();
    let mut bottom = proposed.bottom();

    if right - left < min.width {
        if edge.moves_left() {
            left = right - min.width;
        } else {
            right = left + min.width;
        }
    }
    if bottom - top < min.height {
        if edge.moves_top() {
            top = bottom - min.height;
        } else {
            bottom = top + min.height;
        }
    }

    Rect::from_ltrb(left, top, right, bottom)
}
