//! Geometry engine
//!
//! Pure functions with no shared state: snap-zone classification, snap
//! target rectangles, and resize deltas under minimum-size constraints.

mod zone;
mod snap;
mod resize;

pub use zone::{detect_snap_zone, SnapThresholds, SnapZone};
pub use snap::snap_dimensions;
pub use resize::{compute_resize, ResizeDirection};
