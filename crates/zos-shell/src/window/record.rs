//! Window record stored in the registry

use crate::desktop::DesktopId;
use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;
use super::WindowId;

/// One managed window
///
/// `position` and `size` always hold the window's own geometry. A maximized
/// window keeps them untouched underneath so un-maximizing restores them.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    /// Opaque key of the app view, never interpreted by the core
    pub component_key: String,
    /// False once closed; the record stays as a geometry cache until evicted
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Stacking order, assigned from the registry's monotonic counter
    pub z_index: u32,
    pub position: Vec2,
    pub size: Size,
    pub desktop_id: DesktopId,
}

impl WindowRecord {
    /// Stored geometry as a rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Geometry the renderer should draw, accounting for maximize
    pub fn effective_rect(&self, viewport: &Viewport) -> Rect {
        if self.is_maximized {
            viewport.maximized_rect()
        } else {
            self.rect()
        }
    }

    /// Open and not minimized
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}
