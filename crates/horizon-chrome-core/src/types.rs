//! Basic geometry and color types for the chrome.
//!
//! Window chrome works in whole device pixels, so every coordinate here is an
//! `i32`. Rectangles are half-open: a point on the right or bottom edge is
//! outside the rectangle, matching how the window manager tests regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChromeError;

/// A point in window or screen pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Translate the point by the given offsets.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A size in pixels (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Create a rectangle of `size` at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.origin.y
    }

    /// Right edge x coordinate (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.size.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.size.height
    }

    /// Center point of the rectangle, rounded towards the origin.
    #[inline]
    pub const fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2,
            y: self.origin.y + self.size.height / 2,
        }
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::from_ltrb(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Check whether two rectangles share at least one pixel.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// Expand the rectangle by `dx` horizontally and `dy` vertically on each side.
    #[inline]
    pub const fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.origin.x - dx,
            self.origin.y - dy,
            self.size.width + dx * 2,
            self.size.height + dy * 2,
        )
    }

    /// Shrink the rectangle by the given amount on all sides.
    #[inline]
    pub const fn deflate(&self, amount: i32) -> Rect {
        self.inflate(-amount, -amount)
    }

    /// Offset the rectangle by the given amount.
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }

    /// Move individual edges; positive values move an edge right or down.
    #[inline]
    pub const fn adjust(&self, left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        Rect::from_ltrb(
            self.left() + left,
            self.top() + top,
            self.right() + right,
            self.bottom() + bottom,
        )
    }

    /// Center a rectangle of `size` inside this one.
    pub const fn centered(&self, size: Size) -> Rect {
        Rect::new(
            self.origin.x + (self.size.width - size.width) / 2,
            self.origin.y + (self.size.height - size.height) / 2,
            size.width,
            size.height,
        )
    }
}

/// An opaque 8-bit RGB color.
///
/// Colors are written as `#rrggbb` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::rgb(r, g, b))
    }

    /// Pack as `0x00bbggrr`, the byte order GDI expects.
    #[inline]
    pub const fn to_bgr(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ChromeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ChromeError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ChromeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
