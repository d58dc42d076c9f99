//! Events fed into the interaction state machine and the replies it produces.
//!
//! A platform layer translates its native window messages into
//! [`ChromeEvent`]s, hands them to [`dispatch`](crate::dispatch) and then
//! carries out the returned [`Reply`]: the [`Disposition`] tells it how to
//! answer the native message, the [`ChromeAction`]s are side effects to run
//! once the state has been released.

use crate::region::{CaptionButton, HitRegion, ResizeEdge};
use crate::types::{Point, Rect, Size};

/// How the window's size state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Restored,
    Maximized,
    Minimized,
}

/// Which system setting changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// The monitor work area changed, usually because a taskbar moved or
    /// switched auto-hide.
    WorkArea,
    /// Display resolution or arrangement changed.
    Display,
    Other,
}

/// A high-level command for the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Close,
    Minimize,
    /// Maximize; `origin` is the screen point the request came from.
    Maximize { origin: Point },
    /// Restore from maximized; `origin` is the screen point the request came from.
    Restore { origin: Point },
}

/// A window event, expressed in platform-neutral terms.
///
/// Points are in window coordinates unless the field says `screen_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeEvent {
    /// The window was created and is about to be shown.
    Created,
    /// The window is being destroyed.
    Destroyed,
    /// The window gained or lost input focus.
    FocusChanged { focused: bool },
    /// The window manager asks what lies under `point`.
    HitTest { point: Point },
    /// The pointer moved over the non-client area.
    NcPointerMove { point: Point },
    /// The pointer left the non-client area.
    NcPointerLeave,
    /// The pointer moved over the client area.
    ClientPointerMove,
    /// The primary button went down over the non-client area.
    NcButtonDown { point: Point, hit: HitRegion },
    /// The primary button was released over the non-client area.
    NcButtonUp { hit: HitRegion },
    /// The primary button went down over the client area.
    ClientButtonDown { point: Point },
    /// The system menu was requested by a right click or from the keyboard.
    SystemMenuRequested { screen_point: Point, hit: HitRegion },
    /// Pointer capture was taken away.
    CaptureLost,
    /// The window manager asks for size limits.
    MinMaxInfo,
    /// An interactive resize proposes a new rectangle (screen coordinates).
    Sizing { edge: ResizeEdge, proposed: Rect },
    EnterSizeMove,
    ExitSizeMove,
    SizeChanged { kind: SizeKind },
    /// The window position is about to change.
    ///
    /// `snap_begin` is set when the platform recognized the start of a snap
    /// gesture.
    PositionChanging { snap_begin: bool },
    /// The window position changed; `rect` is in screen coordinates.
    PositionChanged { rect: Rect },
    SettingsChanged { kind: SettingKind },
    /// A window command is about to be carried out.
    CommandRequested(WindowCommand),
}

/// Enablement of the system menu entries that depend on the window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemMenuState {
    pub maximize_enabled: bool,
    pub restore_enabled: bool,
    pub size_enabled: bool,
}

impl SystemMenuState {
    /// Menu entries for a window in the given maximized state.
    pub const fn for_maximized(maximized: bool) -> Self {
        Self {
            maximize_enabled: !maximized,
            restore_enabled: maximized,
            size_enabled: !maximized,
        }
    }
}

/// A side effect the platform performs after dispatch returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    /// Mark a window-coordinate rectangle for repaint.
    Invalidate(Rect),
    /// Ask to be notified when the pointer leaves the non-client area.
    TrackMouseLeave,
    PostCommand(WindowCommand),
    /// Start a window move as if the caption had been pressed.
    BeginDrag { screen_point: Point },
    /// Show the system menu and post the chosen command.
    ShowSystemMenu {
        screen_point: Point,
        menu: SystemMenuState,
    },
    /// Move and resize the window (screen coordinates).
    SetWindowRect(Rect),
    /// Record the rectangle the window returns to when restored.
    RestorePlacement(Rect),
    /// Recompute the non-client frame.
    RefreshFrame,
    /// Repaint the whole window immediately.
    Redraw,
}

/// How the platform should answer the native message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    /// Run the platform's default handling.
    #[default]
    Default,
    /// The message was consumed.
    Handled,
    /// Answer a hit-test request.
    HitTest(HitRegion),
    /// Answer a size-limits request with a minimum tracking size.
    MinTrackSize(Size),
    /// Replace the rectangle carried by the message.
    Rect(Rect),
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub disposition: Disposition,
    pub actions: Vec<ChromeAction>,
}

impl Reply {
    /// Default handling, no side effects.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn with_disposition(disposition: Disposition) -> Self {
        Self {
            disposition,
            actions: Vec::new(),
        }
    }

    /// Mark the message as consumed.
    pub fn handled(mut self) -> Self {
        self.disposition = Disposition::Handled;
        self
    }

    pub fn push(&mut self, action: ChromeAction) {
        self.actions.push(action);
    }

    /// Queue a repaint, skipping empty rectangles and exact repeats.
    pub fn invalidate(&mut self, rect: Rect) {
        let action = ChromeAction::Invalidate(rect);
        if !rect.is_empty() && !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    /// Rectangles queued for repaint, in order.
    pub fn invalidated(&self) -> impl Iterator<Item = Rect> + '_ {
        self.actions.iter().filter_map(|action| match action {
            ChromeAction::Invalidate(rect) => Some(*rect),
            _ => None,
        })
    }

    /// Commands posted by this reply.
    pub fn commands(&self) -> impl Iterator<Item = WindowCommand> + '_ {
        self.actions.iter().filter_map(|action| match action {
            ChromeAction::PostCommand(command) => Some(*command),
            _ => None,
        })
    }

    /// Whether the reply asks for nothing beyond default handling.
    pub fn is_neutral(&self) -> bool {
        self.disposition == Disposition::Default && self.actions.is_empty()
    }
}

impl CaptionButton {
    /// The command pressing this button issues for a window in the given
    /// maximized state. The system menu issues none.
    pub fn command(self, maximized: bool, origin: Point) -> Option<WindowCommand> {
        match self {
            Self::Close => Some(WindowCommand::Close),
            Self::Minimize => Some(WindowCommand::Minimize),
            Self::Maximize if maximized => Some(WindowCommand::Restore { origin }),
            Self::Maximize => Some(WindowCommand::Maximize { origin }),
            Self::SystemMenu => None,
        }
    }
}
