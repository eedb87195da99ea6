//! Input router state machine
//!
//! Holds at most one pointer session (the document-level listener pair)
//! and the snap memory of every window that has been dragged.

use std::collections::HashMap;
use crate::geometry::ResizeDirection;
use crate::math::{Rect, Vec2};
use crate::window::WindowId;
use super::{PointerSession, SnapState};

/// Input router managing pointer sessions and snap memory
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current session, `None` while no listeners are attached
    session: Option<PointerSession>,
    /// Per-window snap memory
    snaps: HashMap<WindowId, SnapState>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current session
    #[inline]
    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    /// Check if a drag or resize is in progress
    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.session.is_some()
    }

    /// Snap memory for a window, if any
    pub fn snap_state(&self, id: &str) -> Option<&SnapState> {
        self.snaps.get(id)
    }

    /// Snap memory for a window, created on first use
    pub fn snap_state_mut(&mut self, id: &str) -> &mut SnapState {
        self.snaps.entry(id.to_string()).or_default()
    }

    /// Start a window move; any previous session is torn down first
    pub fn start_drag(&mut self, window_id: WindowId, offset: Vec2) {
        self.end_session();
        self.snap_state_mut(&window_id).is_dragging = true;
        self.session = Some(PointerSession::Drag {
            window_id,
            offset,
            moved: false,
        });
    }

    /// Record that the pointer moved during the current drag
    pub fn mark_moved(&mut self) {
        if let Some(PointerSession::Drag { moved, .. }) = &mut self.session {
            *moved = true;
        }
    }

    /// Start a window resize; any previous session is torn down first
    pub fn start_resize(
        &mut self,
        window_id: WindowId,
        direction: ResizeDirection,
        start_rect: Rect,
        start_pointer: Vec2,
    ) {
        self.end_session();
        self.snap_state_mut(&window_id).is_resizing = true;
        self.session = Some(PointerSession::Resize {
            window_id,
            direction,
            start_rect,
            start_pointer,
        });
    }

    /// Detach the current session and clear its gesture flags
    ///
    /// Snap memory that ends up empty is dropped.
    pub fn end_session(&mut self) -> Option<PointerSession> {
        let session = self.session.take()?;
        let id = session.window_id();
        if let Some(state) = self.snaps.get_mut(id) {
            state.end_gesture();
            if state.is_idle() {
                self.snaps.remove(id);
            }
        }
        Some(session)
    }

    /// Drop the snap memory of `id` if nothing is left in it
    pub fn prune(&mut self, id: &str) {
        if self.snaps.get(id).is_some_and(|state| state.is_idle()) {
            self.snaps.remove(id);
        }
    }

    /// Cancel the session if it targets `id`
    pub fn cancel_for(&mut self, id: &str) -> bool {
        if self.session.as_ref().is_some_and(|s| s.window_id() == id) {
            self.end_session();
            true
        } else {
            false
        }
    }

    /// Drop all interaction state of a window
    pub fn forget(&mut self, id: &str) {
        self.cancel_for(id);
        self.snaps.remove(id);
    }

    /// Windows currently snapped to a zone
    pub fn snapped_windows(&self) -> impl Iterator<Item = (&WindowId, &SnapState)> {
        self.snaps.iter().filter(|(_, state)| state.is_snapped())
    }
}
