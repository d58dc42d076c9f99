//! Interaction state machine behavior.

mod support;

use horizon_chrome_core::{
    AutoHideEdges, CaptionButton, ChromeAction, ChromeEvent, ChromeRegistry, ChromeState,
    Disposition, HitRegion, Point, Rect, ResizeEdge, SettingKind, Size, SizeKind, WindowCommand,
    dispatch,
};

use support::{MockHost, Window};

const CLOSE_CENTER: Point = Point::new(676, 18);
const MAXIMIZE_CENTER: Point = Point::new(630, 18);
const CAPTION_POINT: Point = Point::new(300, 16);

#[test]
fn test_dispatch_without_state_is_neutral() {
    let host = MockHost::new();
    for event in [
        ChromeEvent::Created,
        ChromeEvent::HitTest { point: CAPTION_POINT },
        ChromeEvent::NcPointerMove { point: CLOSE_CENTER },
        ChromeEvent::NcButtonUp { hit: HitRegion::Close },
        ChromeEvent::SizeChanged { kind: SizeKind::Maximized },
    ] {
        let reply = dispatch(None, &host, event);
        assert!(reply.is_neutral(), "{event:?}");
    }
}

#[test]
fn test_created_refreshes_frame() {
    let host = MockHost::new();
    host.autohide.set(Some(AutoHideEdges {
        left: true,
        ..Default::default()
    }));
    let mut state = ChromeState::default();

    let reply = dispatch(Some(&mut state), &host, ChromeEvent::Created);
    assert_eq!(reply.actions, vec![ChromeAction::RefreshFrame]);
    assert!(state.taskbar_autohide.left);
    assert_eq!(state.restored_bounds, Some(Rect::new(200, 200, 700, 500)));
}

#[test]
fn test_hover_change_invalidates_exact_rects() {
    let mut window = Window::focused();
    let geometry = window.state.geometry(&window.host);

    // Arms tracking but hovers nothing
    let reply = window.move_to(CAPTION_POINT);
    assert_eq!(reply.actions, vec![ChromeAction::TrackMouseLeave]);

    let reply = window.move_to(CLOSE_CENTER);
    assert_eq!(window.state.hovered, Some(CaptionButton::Close));
    assert_eq!(
        reply.invalidated().collect::<Vec<_>>(),
        vec![geometry.close.paint, geometry.sys_menu]
    );

    let reply = window.move_to(MAXIMIZE_CENTER);
    assert_eq!(window.state.hovered, Some(CaptionButton::Maximize));
    assert_eq!(
        reply.invalidated().collect::<Vec<_>>(),
        vec![geometry.close.paint, geometry.maximize.paint, geometry.sys_menu]
    );
    assert_eq!(reply.actions.len(), 3);

    for rect in reply.invalidated() {
        assert!(!rect.intersects(&geometry.client), "{rect:?} touches the client area");
    }

    // Same button again: nothing to repaint
    let reply = window.move_to(MAXIMIZE_CENTER.offset(3, 2));
    assert!(reply.actions.is_empty());
}

#[test]
fn test_close_round_trip_posts_one_command() {
    let mut window = Window::focused();
    window.move_to(CLOSE_CENTER);

    let reply = window.send(ChromeEvent::NcButtonDown {
        point: CLOSE_CENTER,
        hit: HitRegion::Close,
    });
    assert_eq!(reply.disposition, Disposition::Handled);
    assert_eq!(window.state.pressed, Some(CaptionButton::Close));

    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::Close });
    assert_eq!(reply.disposition, Disposition::Handled);
    assert_eq!(reply.commands().collect::<Vec<_>>(), vec![WindowCommand::Close]);
    assert_eq!(window.state.pressed, None);
}

#[test]
fn test_moving_off_button_cancels_press() {
    let mut window = Window::focused();
    window.move_to(CLOSE_CENTER);
    window.send(ChromeEvent::NcButtonDown {
        point: CLOSE_CENTER,
        hit: HitRegion::Close,
    });

    window.move_to(CAPTION_POINT);
    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::Caption });
    assert_eq!(reply.commands().count(), 0);
    assert_eq!(reply.disposition, Disposition::Default);
    assert_eq!(window.state.pressed, None);
}

#[test]
fn test_release_acts_on_hovered_button() {
    let mut window = Window::focused();
    let geometry = window.state.geometry(&window.host);
    window.move_to(CLOSE_CENTER);
    window.send(ChromeEvent::NcButtonDown {
        point: CLOSE_CENTER,
        hit: HitRegion::Close,
    });

    window.move_to(geometry.minimize.hit.center());
    assert_eq!(window.state.hovered, Some(CaptionButton::Minimize));

    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::MinButton });
    assert_eq!(reply.disposition, Disposition::Handled);
    assert_eq!(reply.commands().collect::<Vec<_>>(), vec![WindowCommand::Minimize]);
    assert!(reply.invalidated().any(|rect| rect == geometry.close.paint));
    assert_eq!(window.state.pressed, None);
}

#[test]
fn test_release_over_system_menu_posts_nothing() {
    let mut window = Window::focused();
    let point = Point::new(20, 16);
    window.move_to(point);
    assert_eq!(window.state.hovered, Some(CaptionButton::SystemMenu));

    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::SysMenu });
    assert!(reply.is_neutral());
}

#[test]
fn test_hover_follows_resize_strips_over_icon() {
    let mut window = Window::focused();

    for point in [Point::new(20, 2), Point::new(4, 16), Point::new(4, 2)] {
        let reply = window.send(ChromeEvent::HitTest { point });
        assert!(
            matches!(reply.disposition, Disposition::HitTest(HitRegion::Border(_))),
            "{point:?}"
        );

        let reply = window.move_to(point);
        assert_eq!(window.state.hovered, None, "{point:?}");
        assert_eq!(reply.invalidated().count(), 0, "{point:?}");
    }

    // Just inside the strips the icon highlights again
    window.move_to(Point::new(20, 16));
    assert_eq!(window.state.hovered, Some(CaptionButton::SystemMenu));
}

#[test]
fn test_press_on_top_strip_over_icon_is_a_resize() {
    let mut window = Window::focused();
    let point = Point::new(20, 2);

    let reply = window.send(ChromeEvent::NcButtonDown {
        point,
        hit: HitRegion::Border(ResizeEdge::Top),
    });
    assert!(reply.is_neutral());
    assert_eq!(window.state.hovered, None);
    assert_eq!(window.state.pressed, None);
}

#[test]
fn test_moving_back_onto_button_still_activates() {
    let mut window = Window::focused();
    window.move_to(MAXIMIZE_CENTER);
    window.send(ChromeEvent::NcButtonDown {
        point: MAXIMIZE_CENTER,
        hit: HitRegion::MaxButton,
    });
    window.move_to(CAPTION_POINT);
    window.move_to(MAXIMIZE_CENTER);

    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::MaxButton });
    let origin = window.host.to_screen(MAXIMIZE_CENTER);
    assert_eq!(
        reply.commands().collect::<Vec<_>>(),
        vec![WindowCommand::Maximize { origin }]
    );
}

#[test]
fn test_maximize_button_restores_when_maximized() {
    let mut window = Window::focused();
    window.host.maximize_to(Rect::from_ltrb(0, 0, 1920, 1040));
    let geometry = window.state.geometry(&window.host);
    let center = geometry.maximize.hit.center();

    window.move_to(center);
    window.send(ChromeEvent::NcButtonDown {
        point: center,
        hit: HitRegion::MaxButton,
    });
    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::MaxButton });
    assert_eq!(
        reply.commands().collect::<Vec<_>>(),
        vec![WindowCommand::Restore {
            origin: window.host.to_screen(center)
        }]
    );
}

#[test]
fn test_minimize_button() {
    let mut window = Window::focused();
    let point = Point::new(584, 18);
    window.move_to(point);
    window.send(ChromeEvent::NcButtonDown {
        point,
        hit: HitRegion::MinButton,
    });
    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::MinButton });
    assert_eq!(reply.commands().collect::<Vec<_>>(), vec![WindowCommand::Minimize]);
}

#[test]
fn test_system_menu_press_uses_default_handling() {
    let mut window = Window::focused();
    let point = Point::new(20, 16);

    let reply = window.send(ChromeEvent::NcButtonDown {
        point,
        hit: HitRegion::SysMenu,
    });
    assert_eq!(reply.disposition, Disposition::Default);
    assert_eq!(window.state.hovered, Some(CaptionButton::SystemMenu));
    assert_eq!(window.state.pressed, None);
}

#[test]
fn test_mouse_leave_is_idempotent() {
    let mut window = Window::focused();
    let geometry = window.state.geometry(&window.host);
    window.move_to(CLOSE_CENTER);

    let reply = window.send(ChromeEvent::NcPointerLeave);
    assert_eq!(
        reply.invalidated().collect::<Vec<_>>(),
        vec![
            geometry.close.paint,
            geometry.maximize.paint,
            geometry.minimize.paint,
            geometry.sys_menu,
        ]
    );
    assert_eq!(window.state.hovered, None);
    assert!(!window.state.pointer_in_nonclient);

    for _ in 0..3 {
        let reply = window.send(ChromeEvent::NcPointerLeave);
        assert!(reply.actions.is_empty());
    }

    // Coming back re-arms tracking exactly once
    let reply = window.move_to(CAPTION_POINT);
    assert_eq!(reply.actions, vec![ChromeAction::TrackMouseLeave]);
}

#[test]
fn test_unfocused_then_focused_window() {
    let mut window = Window::created();
    let geometry = window.state.geometry(&window.host);
    assert_eq!(window.host.rect.get().size, Size::new(700, 500));

    // Unfocused: hovering close highlights nothing
    let reply = window.move_to(CLOSE_CENTER);
    assert_eq!(window.state.hovered, None);
    assert_eq!(reply.invalidated().count(), 0);
    let reply = window.move_to(CAPTION_POINT);
    assert_eq!(reply.invalidated().count(), 0);

    let reply = window.send(ChromeEvent::FocusChanged { focused: true });
    assert_eq!(reply.invalidated().collect::<Vec<_>>(), vec![geometry.title_bar]);

    let reply = window.move_to(CLOSE_CENTER);
    let invalidated: Vec<_> = reply.invalidated().collect();
    assert!(!invalidated.is_empty());
    assert!(invalidated.iter().all(|rect| geometry.title_bar.intersect(rect) == Some(*rect)));
}

#[test]
fn test_focus_loss_clears_hover() {
    let mut window = Window::focused();
    let geometry = window.state.geometry(&window.host);
    window.move_to(CLOSE_CENTER);
    window.send(ChromeEvent::NcButtonDown {
        point: CLOSE_CENTER,
        hit: HitRegion::Close,
    });

    let reply = window.send(ChromeEvent::FocusChanged { focused: false });
    assert_eq!(window.state.hovered, None);
    assert_eq!(window.state.pressed, None);
    assert_eq!(reply.invalidated().collect::<Vec<_>>(), vec![geometry.title_bar]);
}

#[test]
fn test_unfocused_title_bar_hit_tests_as_client() {
    let mut window = Window::created();
    let reply = window.send(ChromeEvent::HitTest { point: CAPTION_POINT });
    assert_eq!(reply.disposition, Disposition::HitTest(HitRegion::Client));

    window.send(ChromeEvent::FocusChanged { focused: true });
    let reply = window.send(ChromeEvent::HitTest { point: CAPTION_POINT });
    assert_eq!(reply.disposition, Disposition::HitTest(HitRegion::Caption));
}

#[test]
fn test_client_move_clears_hover() {
    let mut window = Window::focused();
    let geometry = window.state.geometry(&window.host);
    window.move_to(CLOSE_CENTER);

    let reply = window.send(ChromeEvent::ClientPointerMove);
    assert_eq!(window.state.hovered, None);
    assert_eq!(reply.invalidated().collect::<Vec<_>>(), vec![geometry.title_bar]);

    let reply = window.send(ChromeEvent::ClientPointerMove);
    assert!(reply.actions.is_empty());
}

#[test]
fn test_capture_lost_cancels_press() {
    let mut window = Window::focused();
    window.move_to(CLOSE_CENTER);
    window.send(ChromeEvent::NcButtonDown {
        point: CLOSE_CENTER,
        hit: HitRegion::Close,
    });

    window.send(ChromeEvent::CaptureLost);
    assert_eq!(window.state.pressed, None);
    assert_eq!(window.state.hovered, None);

    let reply = window.send(ChromeEvent::NcButtonUp { hit: HitRegion::Close });
    assert_eq!(reply.commands().count(), 0);
}

#[test]
fn test_system_menu_request() {
    let mut window = Window::focused();
    window.move_to(CLOSE_CENTER);
    let screen_point = Point::new(500, 216);

    let reply = window.send(ChromeEvent::SystemMenuRequested {
        screen_point,
        hit: HitRegion::Caption,
    });
    assert_eq!(reply.disposition, Disposition::Handled);
    assert_eq!(window.state.hovered, None);

    let menu = reply
        .actions
        .iter()
        .find_map(|action| match action {
            ChromeAction::ShowSystemMenu { screen_point: at, menu } => Some((*at, *menu)),
            _ => None,
        })
        .unwrap();
    assert_eq!(menu.0, screen_point);
    assert!(menu.1.maximize_enabled);
    assert!(!menu.1.restore_enabled);
    assert!(menu.1.size_enabled);

    window.host.maximize_to(Rect::from_ltrb(0, 0, 1920, 1040));
    let reply = window.send(ChromeEvent::SystemMenuRequested {
        screen_point,
        hit: HitRegion::Caption,
    });
    assert!(reply.actions.contains(&ChromeAction::ShowSystemMenu {
        screen_point,
        menu: horizon_chrome_core::SystemMenuState {
            maximize_enabled: false,
            restore_enabled: true,
            size_enabled: false,
        },
    }));
}

#[test]
fn test_min_track_size_and_sizing() {
    let mut window = Window::focused();
    let min = window.state.geometry(&window.host).min_track_size();

    let reply = window.send(ChromeEvent::MinMaxInfo);
    assert_eq!(reply.disposition, Disposition::MinTrackSize(min));

    let proposed = Rect::from_ltrb(500, 300, 520, 310);
    let reply = window.send(ChromeEvent::Sizing {
        edge: ResizeEdge::TopLeft,
        proposed,
    });
    assert_eq!(
        reply.disposition,
        Disposition::Rect(Rect::from_ltrb(520 - min.width, 310 - min.height, 520, 310))
    );
}

#[test]
fn test_maximize_with_bottom_autohide_taskbar() {
    let work_area = Rect::from_ltrb(0, 0, 1920, 1080);
    let host = MockHost::new();
    host.work_area.set(Some(work_area));
    host.autohide.set(Some(AutoHideEdges {
        bottom: true,
        ..Default::default()
    }));
    let mut state = ChromeState::default();
    dispatch(Some(&mut state), &host, ChromeEvent::Created);

    // The window manager maximizes over the whole monitor
    host.maximize_to(Rect::from_ltrb(-8, -8, 1928, 1088));
    let reply = dispatch(
        Some(&mut state),
        &host,
        ChromeEvent::SizeChanged { kind: SizeKind::Maximized },
    );

    let target = reply
        .actions
        .iter()
        .find_map(|action| match action {
            ChromeAction::SetWindowRect(rect) => Some(*rect),
            _ => None,
        })
        .unwrap();
    assert_eq!(target.bottom(), work_area.bottom() - 1);
    assert_eq!(target.left(), work_area.left());
    assert_eq!(target.top(), work_area.top());
    assert_eq!(target.right(), work_area.right());
    assert_eq!(reply.actions.last(), Some(&ChromeAction::Redraw));

    // Once in place, the next size notification does not loop
    host.rect.set(target);
    let reply = dispatch(
        Some(&mut state),
        &host,
        ChromeEvent::SizeChanged { kind: SizeKind::Maximized },
    );
    assert_eq!(reply.actions, vec![ChromeAction::Redraw]);
}

#[test]
fn test_snap_compensation() {
    let mut window = Window::focused();
    let work_area = Rect::from_ltrb(0, 0, 1920, 1040);
    window.host.maximize_to(Rect::from_ltrb(-8, -8, 1928, 1048));

    window.send(ChromeEvent::PositionChanging { snap_begin: true });
    assert!(window.state.is_snap_transition);

    let reply = window.send(ChromeEvent::PositionChanged {
        rect: Rect::from_ltrb(-8, -8, 1928, 1048),
    });
    assert_eq!(reply.actions, vec![ChromeAction::SetWindowRect(work_area)]);
    assert!(!window.state.is_snap_transition);

    // Consumed: the next change is left alone
    let reply = window.send(ChromeEvent::PositionChanged {
        rect: Rect::from_ltrb(-8, -8, 1928, 1048),
    });
    assert!(reply.actions.is_empty());
}

#[test]
fn test_work_area_change_while_maximized() {
    let mut window = Window::focused();
    let restored = window.host.rect.get();
    window.host.maximize_to(Rect::from_ltrb(0, 0, 1920, 1040));
    window.host.autohide.set(Some(AutoHideEdges {
        top: true,
        ..Default::default()
    }));

    let reply = window.send(ChromeEvent::SettingsChanged {
        kind: SettingKind::WorkArea,
    });
    assert!(window.state.taskbar_autohide.top);
    assert_eq!(
        reply.actions,
        vec![
            ChromeAction::RestorePlacement(restored),
            ChromeAction::SetWindowRect(Rect::from_ltrb(0, 1, 1920, 1040)),
        ]
    );

    let reply = window.send(ChromeEvent::SettingsChanged {
        kind: SettingKind::Other,
    });
    assert!(reply.actions.is_empty());
}

#[test]
fn test_work_area_change_while_restored() {
    let mut window = Window::focused();
    let reply = window.send(ChromeEvent::SettingsChanged {
        kind: SettingKind::Display,
    });
    assert!(reply.actions.is_empty());
}

#[test]
fn test_restored_bounds_follow_restored_window_only() {
    let mut window = Window::focused();

    window.send(ChromeEvent::EnterSizeMove);
    window.host.rect.set(Rect::new(100, 100, 800, 600));
    window.send(ChromeEvent::ExitSizeMove);
    assert_eq!(window.state.restored_bounds, Some(Rect::new(100, 100, 800, 600)));

    window.send(ChromeEvent::CommandRequested(WindowCommand::Maximize {
        origin: Point::ZERO,
    }));
    window.host.maximize_to(Rect::from_ltrb(0, 0, 1920, 1040));
    window.send(ChromeEvent::SizeChanged { kind: SizeKind::Maximized });
    window.send(ChromeEvent::PositionChanged {
        rect: Rect::from_ltrb(0, 0, 1920, 1040),
    });
    window.send(ChromeEvent::EnterSizeMove);
    window.send(ChromeEvent::ExitSizeMove);
    assert_eq!(window.state.restored_bounds, Some(Rect::new(100, 100, 800, 600)));

    window.host.maximized.set(false);
    window.host.rect.set(Rect::new(100, 100, 800, 600));
    let reply = window.send(ChromeEvent::SizeChanged { kind: SizeKind::Restored });
    assert_eq!(
        reply.actions,
        vec![ChromeAction::RefreshFrame, ChromeAction::Redraw]
    );
}

#[test]
fn test_client_press_on_unfocused_title_bar_drags() {
    let mut window = Window::created();
    let reply = window.send(ChromeEvent::ClientButtonDown { point: CAPTION_POINT });
    assert_eq!(
        reply.actions,
        vec![ChromeAction::BeginDrag {
            screen_point: window.host.to_screen(CAPTION_POINT)
        }]
    );
}

#[test]
fn test_registry_dispatch() {
    let host = MockHost::new();
    let mut registry = ChromeRegistry::new();

    let reply = registry.dispatch(1_isize, &host, ChromeEvent::Created);
    assert!(reply.is_neutral());

    registry.insert(1, ChromeState::default());
    let reply = registry.dispatch(1, &host, ChromeEvent::Created);
    assert_eq!(reply.actions, vec![ChromeAction::RefreshFrame]);

    registry.remove(1);
    let reply = registry.dispatch(1, &host, ChromeEvent::MinMaxInfo);
    assert!(reply.is_neutral());
}
