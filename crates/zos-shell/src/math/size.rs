//! 2D size type for window dimensions

use serde::{Deserialize, Serialize};

/// Width and height in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow each dimension up to at least `min`
    #[inline]
    pub fn at_least(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }

    /// Shrink each dimension down to at most `max`
    #[inline]
    pub fn at_most(self, max: Size) -> Self {
        Self::new(self.width.min(max.width), self.height.min(max.height))
    }

    /// Check that both dimensions reach `min`
    #[inline]
    pub fn fits_min(self, min: Size) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_at_least() {
        let s = Size::new(120.0, 500.0).at_least(Size::new(300.0, 200.0));
        assert!((s.width - 300.0).abs() < 0.001);
        assert!((s.height - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_size_at_most() {
        let s = Size::new(800.0, 600.0).at_most(Size::new(375.0, 640.0));
        assert!((s.width - 375.0).abs() < 0.001);
        assert!((s.height - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_size_fits_min() {
        let min = Size::new(300.0, 200.0);
        assert!(Size::new(300.0, 200.0).fits_min(min));
        assert!(!Size::new(299.0, 400.0).fits_min(min));
    }
}
