//! Per-window chrome state.

use crate::config::{ChromeConfig, ChromeMetrics, ChromePalette};
use crate::geometry::ChromeGeometry;
use crate::host::WindowHost;
use crate::placement::{self, AutoHideEdges};
use crate::region::CaptionButton;
use crate::render::{ChromeRenderer, IconSource, PaintState};
use crate::types::Rect;

/// Transient interaction state of one top-level window.
///
/// Created when the window is created and dropped when it is destroyed. All
/// mutation goes through [`dispatch`](crate::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeState {
    /// Button under the pointer. Always `None` while unfocused or after the
    /// pointer left the non-client area.
    pub hovered: Option<CaptionButton>,
    /// Button armed by a button-down, cleared on release or cancellation.
    pub pressed: Option<CaptionButton>,
    /// Mouse-leave tracking is armed.
    pub pointer_in_nonclient: bool,
    /// A snap gesture started; consumed by the next position change.
    pub is_snap_transition: bool,
    /// Auto-hide taskbar edges of the window's monitor.
    pub taskbar_autohide: AutoHideEdges,
    /// Last rectangle of the window while neither maximized nor minimized.
    pub restored_bounds: Option<Rect>,
    pub focused: bool,
    /// An interactive move or resize loop is running.
    pub in_size_move: bool,
    pub metrics: ChromeMetrics,
    pub palette: ChromePalette,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self::new(ChromeMetrics::default(), ChromePalette::default())
    }
}

impl ChromeState {
    pub fn new(metrics: ChromeMetrics, palette: ChromePalette) -> Self {
        Self {
            hovered: None,
            pressed: None,
            pointer_in_nonclient: false,
            is_snap_transition: false,
            taskbar_autohide: AutoHideEdges::NONE,
            restored_bounds: None,
            focused: false,
            in_size_move: false,
            metrics,
            palette,
        }
    }

    pub fn from_config(config: &ChromeConfig) -> Self {
        Self::new(config.metrics, config.palette)
    }

    /// Geometry of the window as the host currently reports it.
    pub fn geometry(&self, host: &dyn WindowHost) -> ChromeGeometry {
        ChromeGeometry::resolve(host.window_rect().size, host.is_maximized(), &self.metrics)
    }

    /// Geometry of the window as if it were restored, used for size limits.
    pub(crate) fn restored_geometry(&self, host: &dyn WindowHost) -> ChromeGeometry {
        ChromeGeometry::resolve(host.window_rect().size, false, &self.metrics)
    }

    /// Where the window belongs while maximized, if the work area is known.
    pub fn maximize_target(&self, host: &dyn WindowHost) -> Option<Rect> {
        host.work_area()
            .map(|work_area| placement::maximize_target(work_area, self.taskbar_autohide))
    }

    /// Everything the renderer needs besides the geometry.
    pub fn paint_state<'a>(&self, maximized: bool, title: &'a str, icon: IconSource) -> PaintState<'a> {
        PaintState {
            maximized,
            focused: self.focused,
            hovered: self.hovered,
            pressed: self.pressed,
            title,
            icon,
        }
    }

    pub fn renderer(&self) -> ChromeRenderer {
        ChromeRenderer::new(&self.metrics, self.palette)
    }

    /// Forget hover and press. Returns the buttons that were highlighted.
    pub(crate) fn clear_transient(&mut self) -> [Option<CaptionButton>; 2] {
        [self.hovered.take(), self.pressed.take()]
    }

    pub(crate) fn refresh_autohide(&mut self, host: &dyn WindowHost) {
        if let Some(edges) = host.autohide_edges() {
            self.taskbar_autohide = edges;
        }
    }

    /// Record the current rectangle as the restored bounds, unless the window
    /// is maximized or minimized.
    pub(crate) fn remember_restored_bounds(&mut self, host: &dyn WindowHost) {
        if !host.is_maximized() && !host.is_minimized() {
            self.restored_bounds = Some(host.window_rect());
        }
    }
}
