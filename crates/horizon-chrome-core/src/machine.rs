//! The interaction state machine.
//!
//! [`dispatch`] is the single entry point. It reads the window through a
//! [`WindowHost`], updates the [`ChromeState`] and returns a [`Reply`]. It
//! never calls back into the platform itself: side effects such as showing the
//! system menu run after the state borrow is released, so a nested message
//! loop may dispatch further events safely.

use crate::event::{
    ChromeAction, ChromeEvent, Disposition, Reply, SettingKind, SizeKind, SystemMenuState,
    WindowCommand,
};
use crate::geometry::ChromeGeometry;
use crate::hit_test::hit_test;
use crate::host::WindowHost;
use crate::logging::{span_names, targets};
use crate::placement::{clamp_sizing, compensate_snap};
use crate::region::{CaptionButton, HitRegion, ResizeEdge};
use crate::state::ChromeState;
use crate::types::{Point, Rect};

/// Feed one event to the window's chrome state.
///
/// A window without state (messages that arrive before creation or after
/// destruction) gets the neutral reply: default handling and no actions.
pub fn dispatch(state: Option<&mut ChromeState>, host: &dyn WindowHost, event: ChromeEvent) -> Reply {
    let Some(state) = state else {
        tracing::trace!(target: targets::INTERACTION, ?event, "no chrome state");
        return Reply::neutral();
    };

    let _span = tracing::trace_span!(
        target: targets::INTERACTION,
        "chrome",
        operation = span_names::DISPATCH
    )
    .entered();
    state.handle(host, event)
}

impl ChromeState {
    /// Handle one event. See [`dispatch`].
    pub fn handle(&mut self, host: &dyn WindowHost, event: ChromeEvent) -> Reply {
        match event {
            ChromeEvent::Created => self.on_created(host),
            ChromeEvent::Destroyed => {
                tracing::debug!(target: targets::INTERACTION, "chrome state released");
                Reply::neutral()
            }
            ChromeEvent::FocusChanged { focused } => self.on_focus_changed(host, focused),
            ChromeEvent::HitTest { point } => {
                let geometry = self.geometry(host);
                Reply::with_disposition(Disposition::HitTest(hit_test(&geometry, point, self.focused)))
            }
            ChromeEvent::NcPointerMove { point } => self.on_nc_pointer_move(host, point),
            ChromeEvent::NcPointerLeave => self.on_nc_pointer_leave(host),
            ChromeEvent::ClientPointerMove => self.on_client_pointer_move(host),
            ChromeEvent::NcButtonDown { point, hit } => self.on_nc_button_down(host, point, hit),
            ChromeEvent::NcButtonUp { hit } => self.on_nc_button_up(host, hit),
            ChromeEvent::ClientButtonDown { point } => self.on_client_button_down(host, point),
            ChromeEvent::SystemMenuRequested { screen_point, hit } => {
                self.on_system_menu_requested(host, screen_point, hit)
            }
            ChromeEvent::CaptureLost => {
                let mut reply = Reply::neutral();
                let geometry = self.geometry(host);
                self.cancel_interaction(&geometry, &mut reply);
                reply
            }
            ChromeEvent::MinMaxInfo => Reply::with_disposition(Disposition::MinTrackSize(
                self.restored_geometry(host).min_track_size(),
            )),
            ChromeEvent::Sizing { edge, proposed } => self.on_sizing(host, edge, proposed),
            ChromeEvent::EnterSizeMove => {
                self.in_size_move = true;
                Reply::neutral()
            }
            ChromeEvent::ExitSizeMove => {
                self.in_size_move = false;
                self.remember_restored_bounds(host);
                Reply::neutral()
            }
            ChromeEvent::SizeChanged { kind } => self.on_size_changed(host, kind),
            ChromeEvent::PositionChanging { snap_begin } => {
                if snap_begin {
                    tracing::debug!(target: targets::PLACEMENT, "snap gesture started");
                    self.is_snap_transition = true;
                }
                Reply::neutral()
            }
            ChromeEvent::PositionChanged { rect } => self.on_position_changed(host, rect),
            ChromeEvent::SettingsChanged { kind } => self.on_settings_changed(host, kind),
            ChromeEvent::CommandRequested(command) => {
                if matches!(command, WindowCommand::Maximize { .. }) {
                    self.remember_restored_bounds(host);
                }
                Reply::neutral()
            }
        }
    }

    fn on_created(&mut self, host: &dyn WindowHost) -> Reply {
        self.refresh_autohide(host);
        self.remember_restored_bounds(host);
        tracing::debug!(
            target: targets::INTERACTION,
            autohide = self.taskbar_autohide.any(),
            "chrome state created"
        );

        let mut reply = Reply::neutral();
        reply.push(ChromeAction::RefreshFrame);
        reply
    }

    fn on_focus_changed(&mut self, host: &dyn WindowHost, focused: bool) -> Reply {
        tracing::debug!(target: targets::INTERACTION, focused, "focus changed");
        self.focused = focused;
        if !focused {
            self.clear_transient();
        }

        let mut reply = Reply::neutral();
        reply.invalidate(self.geometry(host).title_bar);
        reply
    }

    fn on_nc_pointer_move(&mut self, host: &dyn WindowHost, point: Point) -> Reply {
        let mut reply = Reply::neutral();
        if !self.pointer_in_nonclient {
            self.pointer_in_nonclient = true;
            reply.push(ChromeAction::TrackMouseLeave);
        }

        let geometry = self.geometry(host);
        let hovered = if self.focused {
            hit_test(&geometry, point, true).button()
        } else {
            None
        };
        self.set_hovered(&geometry, hovered, &mut reply);
        reply
    }

    fn on_nc_pointer_leave(&mut self, host: &dyn WindowHost) -> Reply {
        let mut reply = Reply::neutral();
        if !self.pointer_in_nonclient {
            return reply;
        }

        self.pointer_in_nonclient = false;
        self.clear_transient();
        tracing::trace!(target: targets::INTERACTION, "pointer left non-client area");

        let geometry = self.geometry(host);
        for button in CaptionButton::CAPTION {
            reply.invalidate(geometry.button_paint_rect(button));
        }
        reply.invalidate(geometry.sys_menu);
        reply
    }

    fn on_client_pointer_move(&mut self, host: &dyn WindowHost) -> Reply {
        let mut reply = Reply::neutral();
        let [hovered, pressed] = self.clear_transient();
        if hovered.is_some() || pressed.is_some() {
            reply.invalidate(self.geometry(host).title_bar);
        }
        reply
    }

    fn on_nc_button_down(&mut self, host: &dyn WindowHost, point: Point, hit: HitRegion) -> Reply {
        let geometry = self.geometry(host);
        let mut reply = Reply::neutral();

        // Resize strips win over the buttons they overlap
        match hit_test(&geometry, point, true).button() {
            Some(CaptionButton::SystemMenu) => {
                // The native handler opens the menu
                self.set_hovered(&geometry, Some(CaptionButton::SystemMenu), &mut reply);
                reply
            }
            Some(button) => {
                tracing::debug!(target: targets::INTERACTION, ?button, ?hit, "caption button pressed");
                self.hovered = Some(button);
                self.pressed = Some(button);
                reply.invalidate(geometry.button_paint_rect(button));
                reply.handled()
            }
            None => {
                if let Some(button) = self.pressed.take() {
                    reply.invalidate(geometry.button_paint_rect(button));
                }
                reply
            }
        }
    }

    fn on_nc_button_up(&mut self, host: &dyn WindowHost, hit: HitRegion) -> Reply {
        let geometry = self.geometry(host);
        let mut reply = Reply::neutral();

        if let Some(pressed) = self.pressed.take() {
            reply.invalidate(geometry.button_paint_rect(pressed));
        }

        // The hovered button decides; the hit code may be stale after a slide
        let Some(button) = self.hovered.filter(|button| button.is_caption()) else {
            tracing::trace!(target: targets::INTERACTION, hovered = ?self.hovered, ?hit, "release over no caption button");
            return reply;
        };

        match button.command(host.is_maximized(), host.cursor_pos()) {
            Some(command) => {
                tracing::debug!(target: targets::INTERACTION, ?command, ?hit, "caption button activated");
                reply.push(ChromeAction::PostCommand(command));
                reply.handled()
            }
            None => reply,
        }
    }

    fn on_client_button_down(&mut self, host: &dyn WindowHost, point: Point) -> Reply {
        let geometry = self.geometry(host);
        // The unfocused title bar answers "client"; a press there still drags
        if hit_test(&geometry, point, true) != HitRegion::Caption {
            return Reply::neutral();
        }

        let origin = host.window_rect().origin;
        let mut reply = Reply::neutral();
        reply.push(ChromeAction::BeginDrag {
            screen_point: origin.offset(point.x, point.y),
        });
        reply.handled()
    }

    fn on_system_menu_requested(
        &mut self,
        host: &dyn WindowHost,
        screen_point: Point,
        hit: HitRegion,
    ) -> Reply {
        if !matches!(hit, HitRegion::Caption | HitRegion::SysMenu) {
            return Reply::neutral();
        }

        let geometry = self.geometry(host);
        let mut reply = Reply::neutral();
        self.cancel_interaction(&geometry, &mut reply);
        reply.push(ChromeAction::ShowSystemMenu {
            screen_point,
            menu: SystemMenuState::for_maximized(host.is_maximized()),
        });
        reply.handled()
    }

    fn on_sizing(&mut self, host: &dyn WindowHost, edge: ResizeEdge, proposed: Rect) -> Reply {
        let min = self.restored_geometry(host).min_track_size();
        Reply::with_disposition(Disposition::Rect(clamp_sizing(proposed, edge, min)))
    }

    fn on_size_changed(&mut self, host: &dyn WindowHost, kind: SizeKind) -> Reply {
        let mut reply = Reply::neutral();
        match kind {
            SizeKind::Maximized => {
                if let Some(target) = self.maximize_target(host) {
                    let current = host.window_rect();
                    if current != target {
                        tracing::debug!(
                            target: targets::PLACEMENT,
                            ?current,
                            ?target,
                            "fitting maximized window to work area"
                        );
                        reply.push(ChromeAction::SetWindowRect(target));
                    }
                } else {
                    tracing::warn!(target: targets::PLACEMENT, "work area unavailable, keeping maximized rect");
                }
                reply.push(ChromeAction::Redraw);
            }
            SizeKind::Restored => {
                self.remember_restored_bounds(host);
                reply.push(ChromeAction::RefreshFrame);
                reply.push(ChromeAction::Redraw);
            }
            SizeKind::Minimized => {
                self.clear_transient();
            }
        }
        reply
    }

    fn on_position_changed(&mut self, host: &dyn WindowHost, rect: Rect) -> Reply {
        let mut reply = Reply::neutral();
        let maximized = host.is_maximized();

        if std::mem::take(&mut self.is_snap_transition) && maximized {
            if let Some(target) = self.maximize_target(host) {
                let fixed = compensate_snap(rect, host.frame_border(), target);
                if fixed != rect {
                    tracing::debug!(
                        target: targets::PLACEMENT,
                        reported = ?rect,
                        ?fixed,
                        "compensating snapped window"
                    );
                    reply.push(ChromeAction::SetWindowRect(fixed));
                }
            }
            return reply;
        }

        if !maximized && !host.is_minimized() && !self.in_size_move {
            self.restored_bounds = Some(rect);
        }
        reply
    }

    fn on_settings_changed(&mut self, host: &dyn WindowHost, kind: SettingKind) -> Reply {
        let mut reply = Reply::neutral();
        if kind == SettingKind::Other {
            return reply;
        }

        self.refresh_autohide(host);
        tracing::debug!(
            target: targets::PLACEMENT,
            ?kind,
            autohide = ?self.taskbar_autohide,
            "work area settings changed"
        );

        if host.is_maximized() {
            if let Some(bounds) = self.restored_bounds {
                reply.push(ChromeAction::RestorePlacement(bounds));
            }
            if let Some(target) = self.maximize_target(host) {
                reply.push(ChromeAction::SetWindowRect(target));
            }
        }
        reply
    }

    fn set_hovered(&mut self, geometry: &ChromeGeometry, hovered: Option<CaptionButton>, reply: &mut Reply) {
        if self.hovered == hovered {
            return;
        }

        tracing::trace!(target: targets::INTERACTION, from = ?self.hovered, to = ?hovered, "hover changed");
        let previous = std::mem::replace(&mut self.hovered, hovered);
        for button in [previous, hovered].into_iter().flatten() {
            reply.invalidate(geometry.button_paint_rect(button));
        }
        reply.invalidate(geometry.sys_menu);
    }

    /// Drop hover and press, repainting whatever was highlighted.
    fn cancel_interaction(&mut self, geometry: &ChromeGeometry, reply: &mut Reply) {
        for button in self.clear_transient().into_iter().flatten() {
            reply.invalidate(geometry.button_paint_rect(button));
        }
    }
}
