//! Symbolic regions of the chrome.

use cursor_icon::CursorIcon;

use crate::error::ChromeError;

/// One of the interactive controls painted in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CaptionButton {
    Close = 1,
    Maximize = 2,
    Minimize = 3,
    /// The window icon, which opens the system menu.
    SystemMenu = 4,
}

impl CaptionButton {
    /// The three buttons on the right of the title bar, right to left.
    pub const CAPTION: [CaptionButton; 3] = [Self::Close, Self::Maximize, Self::Minimize];

    /// The region a hit test reports for this button.
    pub const fn region(self) -> HitRegion {
        match self {
            Self::Close => HitRegion::Close,
            Self::Maximize => HitRegion::MaxButton,
            Self::Minimize => HitRegion::MinButton,
            Self::SystemMenu => HitRegion::SysMenu,
        }
    }

    /// Whether this is one of the close/maximize/minimize buttons.
    pub const fn is_caption(self) -> bool {
        !matches!(self, Self::SystemMenu)
    }
}

impl TryFrom<u8> for CaptionButton {
    type Error = ChromeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Close),
            2 => Ok(Self::Maximize),
            3 => Ok(Self::Minimize),
            4 => Ok(Self::SystemMenu),
            other => Err(ChromeError::InvalidButton(other)),
        }
    }
}

/// Edge or corner of a window being resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    /// Whether dragging this edge moves the window's left side.
    pub const fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    /// Whether dragging this edge moves the window's top side.
    pub const fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }
}

/// Result of hit testing a point against the chrome.
///
/// This tells the window manager what dragging or clicking at the point
/// should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// Outside the window.
    Nowhere,
    /// Application content; the platform delivers ordinary mouse events.
    Client,
    /// Plain title bar; dragging moves the window.
    Caption,
    /// The window icon.
    SysMenu,
    MinButton,
    MaxButton,
    Close,
    /// A resize strip or corner.
    Border(ResizeEdge),
}

impl HitRegion {
    /// Check if this result indicates a resize operation.
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Border(_))
    }

    /// The caption button occupying this region, if any.
    pub fn button(&self) -> Option<CaptionButton> {
        match self {
            Self::Close => Some(CaptionButton::Close),
            Self::MaxButton => Some(CaptionButton::Maximize),
            Self::MinButton => Some(CaptionButton::Minimize),
            Self::SysMenu => Some(CaptionButton::SystemMenu),
            _ => None,
        }
    }

    /// The cursor to show while hovering this region.
    pub fn cursor(&self) -> CursorIcon {
        match self {
            Self::Border(edge) => match edge {
                ResizeEdge::Top | ResizeEdge::Bottom => CursorIcon::NsResize,
                ResizeEdge::Left | ResizeEdge::Right => CursorIcon::EwResize,
                ResizeEdge::TopLeft | ResizeEdge::BottomRight => CursorIcon::NwseResize,
                ResizeEdge::TopRight | ResizeEdge::BottomLeft => CursorIcon::NeswResize,
            },
            _ => CursorIcon::Default,
        }
    }
}
