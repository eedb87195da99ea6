//! Pointer-capture session for one drag or resize gesture

use crate::geometry::ResizeDirection;
use crate::math::{Rect, Vec2};
use crate::window::WindowId;

/// Active gesture; its existence stands for the attached move/up listener pair
#[derive(Clone, Debug, PartialEq)]
pub enum PointerSession {
    /// Moving a window by its header
    Drag {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
        /// Set by the first pointer move; a bare click is not a drag
        moved: bool,
    },
    /// Resizing a window from a handle
    Resize {
        /// Window being resized
        window_id: WindowId,
        /// Which handle
        direction: ResizeDirection,
        /// Window geometry at start
        start_rect: Rect,
        /// Pointer position at start
        start_pointer: Vec2,
    },
}

impl PointerSession {
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, PointerSession::Drag { .. })
    }

    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, PointerSession::Resize { .. })
    }

    /// Window targeted by the gesture
    pub fn window_id(&self) -> &str {
        match self {
            PointerSession::Drag { window_id, .. } | PointerSession::Resize { window_id, .. } => window_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_session() {
        let session = PointerSession::Drag {
            window_id: "finder".to_string(),
            offset: Vec2::new(40.0, 12.0),
            moved: false,
        };
        assert!(session.is_drag());
        assert!(!session.is_resize());
        assert_eq!(session.window_id(), "finder");
    }

    #[test]
    fn test_resize_session() {
        let session = PointerSession::Resize {
            window_id: "maps".to_string(),
            direction: ResizeDirection::SW,
            start_rect: Rect::new(0.0, 0.0, 500.0, 400.0),
            start_pointer: Vec2::new(0.0, 400.0),
        };
        assert!(session.is_resize());
        assert_eq!(session.window_id(), "maps");
    }
}
