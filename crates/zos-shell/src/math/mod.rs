//! Core geometry types for the window manager
//!
//! Positions and sizes are logical pixels in viewport space, origin at the
//! top-left corner of the page.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
