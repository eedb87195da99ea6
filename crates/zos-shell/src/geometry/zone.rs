//! Snap zone classification

use serde::{Deserialize, Serialize};
use crate::config::ShellConfig;
use crate::math::Vec2;
use crate::viewport::Viewport;

/// Region of the screen a dragged window snaps to when released
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapZone {
    Left,
    Right,
    Top,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Maximize,
    #[default]
    None,
}

impl SnapZone {
    #[inline]
    pub fn is_none(self) -> bool {
        self == SnapZone::None
    }

    /// Check if this is one of the four quarter zones
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            SnapZone::TopLeft | SnapZone::TopRight | SnapZone::BottomLeft | SnapZone::BottomRight
        )
    }
}

/// Hit-box sizes used by [`detect_snap_zone`]
///
/// Corner boxes must be larger than the edge threshold; corner regions
/// overlap edge regions and are tested first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapThresholds {
    /// Distance from an edge that arms an edge zone
    pub edge: f32,
    /// Side of the square corner hit-box
    pub corner: f32,
}

impl Default for SnapThresholds {
    fn default() -> Self {
        Self { edge: 20.0, corner: 40.0 }
    }
}

impl From<&ShellConfig> for SnapThresholds {
    fn from(config: &ShellConfig) -> Self {
        Self {
            edge: config.edge_threshold,
            corner: config.corner_size,
        }
    }
}

/// Classify a pointer position into a snap zone
///
/// Vertical distances are measured from the usable area (below the menu
/// bar, above the dock), horizontal ones from the viewport sides.
/// Precedence: corners, then the top edge (maximize), then left/right.
pub fn detect_snap_zone(pointer: Vec2, viewport: &Viewport, thresholds: SnapThresholds) -> SnapZone {
    let usable = viewport.usable_rect();
    let width = viewport.width();

    let near_left = pointer.x < thresholds.corner;
    let near_right = pointer.x > width - thresholds.corner;
    let near_top = pointer.y < usable.y + thresholds.corner;
    let near_bottom = pointer.y > usable.bottom() - thresholds.corner;

    match (near_left, near_right, near_top, near_bottom) {
        (true, _, true, _) => return SnapZone::TopLeft,
        (_, true, true, _) => return SnapZone::TopRight,
        (true, _, _, true) => return SnapZone::BottomLeft,
        (_, true, _, true) => return SnapZone::BottomRight,
        _ => {}
    }

    if pointer.y < usable.y + thresholds.edge {
        return SnapZone::Maximize;
    }
    if pointer.x < thresholds.edge {
        return SnapZone::Left;
    }
    if pointer.x > width - thresholds.edge {
        return SnapZone::Right;
    }
    SnapZone::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1600.0, 900.0, &ShellConfig::default())
    }

    fn detect(x: f32, y: f32) -> SnapZone {
        detect_snap_zone(Vec2::new(x, y), &viewport(), SnapThresholds::default())
    }

    #[test]
    fn test_left_and_right_edges() {
        assert_eq!(detect(5.0, 400.0), SnapZone::Left);
        assert_eq!(detect(1595.0, 400.0), SnapZone::Right);
    }

    #[test]
    fn test_top_edge_maximizes() {
        assert_eq!(detect(800.0, 30.0), SnapZone::Maximize);
        // Inside the menu bar still counts as the top edge
        assert_eq!(detect(800.0, 4.0), SnapZone::Maximize);
    }

    #[test]
    fn test_corners_win_over_edges() {
        // (5, 30) is within both the left and top edge thresholds
        assert_eq!(detect(5.0, 30.0), SnapZone::TopLeft);
        assert_eq!(detect(1598.0, 30.0), SnapZone::TopRight);
        assert_eq!(detect(5.0, 815.0), SnapZone::BottomLeft);
        assert_eq!(detect(1598.0, 815.0), SnapZone::BottomRight);
    }

    #[test]
    fn test_corner_box_is_larger_than_edge() {
        // 30px from the side: outside the edge threshold, inside the corner box
        assert_eq!(detect(30.0, 40.0), SnapZone::TopLeft);
        assert_eq!(detect(30.0, 400.0), SnapZone::None);
    }

    #[test]
    fn test_center_is_none() {
        assert_eq!(detect(800.0, 450.0), SnapZone::None);
        assert!(detect(800.0, 450.0).is_none());
    }

    #[test]
    fn test_is_corner() {
        assert!(SnapZone::BottomRight.is_corner());
        assert!(!SnapZone::Left.is_corner());
        assert!(!SnapZone::Maximize.is_corner());
    }
}
