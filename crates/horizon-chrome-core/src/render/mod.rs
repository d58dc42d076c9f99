//! Chrome rendering.
//!
//! [`ChromeRenderer`] draws the chrome onto any [`Surface`]. The Win32 backend
//! provides a GDI surface; [`DisplayList`] records commands for tests and
//! headless use.

mod chrome_renderer;
mod surface;
mod text;

pub use chrome_renderer::{ButtonVisual, ChromeRenderer, PaintState};
pub use surface::{DisplayList, DrawCommand, IconSource, Surface};
pub use text::{ELLIPSIS, fit_text};
