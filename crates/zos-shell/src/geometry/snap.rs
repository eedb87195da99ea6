//! Snap target rectangles

use crate::math::Rect;
use crate::viewport::Viewport;
use super::SnapZone;

/// Target rectangle for a snap zone, partitioning the usable area
///
/// Halves for `Left`/`Right`/`Top`, quarters for corners, the full usable
/// area for `Maximize`, and `None` for [`SnapZone::None`].
pub fn snap_dimensions(zone: SnapZone, viewport: &Viewport) -> Option<Rect> {
    let usable = viewport.usable_rect();
    let (left, right) = usable.halves_horizontal();

    let rect = match zone {
        SnapZone::Left => left,
        SnapZone::Right => right,
        SnapZone::Top => usable.halves_vertical().0,
        SnapZone::TopLeft => left.halves_vertical().0,
        SnapZone::BottomLeft => left.halves_vertical().1,
        SnapZone::TopRight => right.halves_vertical().0,
        SnapZone::BottomRight => right.halves_vertical().1,
        SnapZone::Maximize => usable,
        SnapZone::None => return None,
    };
    Some(rect)
}
