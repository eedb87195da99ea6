//! Transient per-window snap memory

use serde::Serialize;
use crate::geometry::SnapZone;
use crate::math::{Size, Vec2};

/// Geometry saved before a window snapped
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PreSnap {
    pub position: Vec2,
    pub size: Size,
}

/// Interaction flags for one window; never persisted
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapState {
    pub is_dragging: bool,
    pub is_resizing: bool,
    /// Zone under the pointer during the current drag
    pub active_zone: SnapZone,
    /// Zone the window is currently snapped to, `None` when free
    pub snapped_zone: SnapZone,
    /// Geometry to restore when the window is dragged out of its zone
    pub pre_snap: Option<PreSnap>,
}

impl SnapState {
    #[inline]
    pub fn is_snapped(&self) -> bool {
        !self.snapped_zone.is_none()
    }

    /// Reset the per-gesture flags, keeping snap memory
    pub fn end_gesture(&mut self) {
        self.is_dragging = false;
        self.is_resizing = false;
        self.active_zone = SnapZone::None;
    }

    /// True when nothing worth remembering is left
    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == SnapState::default()
    }
}
