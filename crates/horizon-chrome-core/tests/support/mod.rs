//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::Once;

use horizon_chrome_core::{
    AutoHideEdges, ChromeEvent, ChromeState, Point, Rect, Reply, WindowHost, dispatch,
};

/// A window whose properties the test controls.
pub struct MockHost {
    pub rect: Cell<Rect>,
    pub maximized: Cell<bool>,
    pub minimized: Cell<bool>,
    pub cursor: Cell<Point>,
    pub work_area: Cell<Option<Rect>>,
    pub autohide: Cell<Option<AutoHideEdges>>,
    pub frame_border: Cell<i32>,
}

impl MockHost {
    /// A restored 700x500 window at (200, 200) on a 1920x1040 work area.
    pub fn new() -> Self {
        Self {
            rect: Cell::new(Rect::new(200, 200, 700, 500)),
            maximized: Cell::new(false),
            minimized: Cell::new(false),
            cursor: Cell::new(Point::new(200, 200)),
            work_area: Cell::new(Some(Rect::from_ltrb(0, 0, 1920, 1040))),
            autohide: Cell::new(Some(AutoHideEdges::NONE)),
            frame_border: Cell::new(8),
        }
    }

    /// Put the window into the maximized state at `rect`.
    pub fn maximize_to(&self, rect: Rect) {
        self.maximized.set(true);
        self.rect.set(rect);
    }

    /// Window coordinates to screen coordinates.
    pub fn to_screen(&self, point: Point) -> Point {
        let origin = self.rect.get().origin;
        point.offset(origin.x, origin.y)
    }
}

impl WindowHost for MockHost {
    fn window_rect(&self) -> Rect {
        self.rect.get()
    }

    fn is_maximized(&self) -> bool {
        self.maximized.get()
    }

    fn is_minimized(&self) -> bool {
        self.minimized.get()
    }

    fn cursor_pos(&self) -> Point {
        self.cursor.get()
    }

    fn work_area(&self) -> Option<Rect> {
        self.work_area.get()
    }

    fn autohide_edges(&self) -> Option<AutoHideEdges> {
        self.autohide.get()
    }

    fn frame_border(&self) -> i32 {
        self.frame_border.get()
    }
}

/// A window under test: its host and its chrome state.
pub struct Window {
    pub host: MockHost,
    pub state: ChromeState,
}

impl Window {
    /// A created window that has not received focus yet.
    pub fn created() -> Self {
        init_tracing();
        let mut window = Self {
            host: MockHost::new(),
            state: ChromeState::default(),
        };
        window.send(ChromeEvent::Created);
        window
    }

    /// A created window that has focus.
    pub fn focused() -> Self {
        let mut window = Self::created();
        window.send(ChromeEvent::FocusChanged { focused: true });
        window
    }

    pub fn send(&mut self, event: ChromeEvent) -> Reply {
        dispatch(Some(&mut self.state), &self.host, event)
    }

    /// Move the pointer over the non-client area, keeping the host cursor in sync.
    pub fn move_to(&mut self, point: Point) -> Reply {
        self.host.cursor.set(self.host.to_screen(point));
        self.send(ChromeEvent::NcPointerMove { point })
    }
}

static TRACING: Once = Once::new();

/// Route chrome logs to the test output. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
