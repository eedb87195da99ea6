//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Split into left and right halves
    pub fn halves_horizontal(&self) -> (Rect, Rect) {
        let half = self.width / 2.0;
        (
            Rect::new(self.x, self.y, half, self.height),
            Rect::new(self.x + half, self.y, self.width - half, self.height),
        )
    }

    /// Split into top and bottom halves
    pub fn halves_vertical(&self) -> (Rect, Rect) {
        let half = self.height / 2.0;
        (
            Rect::new(self.x, self.y, self.width, half),
            Rect::new(self.x, self.y + half, self.width, self.height - half),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let r = Rect::new(100.0, 50.0, 400.0, 300.0);
        let c = r.center();
        assert!((c.x - 300.0).abs() < 0.001);
        assert!((c.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_halves() {
        let usable = Rect::new(0.0, 28.0, 1600.0, 792.0);

        let (left, right) = usable.halves_horizontal();
        assert!((left.width - 800.0).abs() < 0.001);
        assert!((right.x - 800.0).abs() < 0.001);
        assert!((right.right() - 1600.0).abs() < 0.001);

        let (top, bottom) = usable.halves_vertical();
        assert!((top.y - 28.0).abs() < 0.001);
        assert!((top.height - 396.0).abs() < 0.001);
        assert!((bottom.bottom() - 820.0).abs() < 0.001);
    }
}
