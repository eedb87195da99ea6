//! Pointer handlers for window drag, snap, and resize

use tracing::{debug, trace};
use crate::geometry::{compute_resize, detect_snap_zone, snap_dimensions, ResizeDirection, SnapThresholds, SnapZone};
use crate::input::{InputResult, PointerSession, PreSnap};
use crate::math::{Rect, Vec2};
use super::ShellEngine;

impl ShellEngine {
    /// Whether a window may start a pointer gesture
    fn accepts_gesture(&self, id: &str) -> bool {
        let Some(window) = self.registry.get(id) else {
            return false;
        };
        let leaving = self.animator.phase(id).is_some_and(|p| p.is_leaving());
        window.is_visible() && !window.is_maximized && !leaving
    }

    /// Start moving a window by its header
    pub fn begin_drag(&mut self, id: &str, pointer: Vec2) -> InputResult {
        if !self.accepts_gesture(id) {
            return InputResult::Unhandled;
        }
        let Some(window) = self.registry.get(id) else {
            return InputResult::Unhandled;
        };
        let (position, size) = (window.position, window.size);

        self.registry.focus(id);
        let state = self.input.snap_state_mut(id);
        if !state.is_snapped() {
            state.pre_snap = Some(PreSnap { position, size });
        }
        self.input.start_drag(id.to_string(), pointer - position);
        InputResult::Handled
    }

    /// Follow the pointer and track the snap zone under it
    pub fn drag_move(&mut self, pointer: Vec2) -> InputResult {
        let (id, offset) = match self.input.session() {
            Some(PointerSession::Drag { window_id, offset, .. }) => (window_id.clone(), *offset),
            _ => return InputResult::Unhandled,
        };

        self.input.mark_moved();
        self.registry.update_position(&id, pointer - offset);

        let zone = detect_snap_zone(pointer, &self.viewport, SnapThresholds::from(&self.config));
        let state = self.input.snap_state_mut(&id);
        if state.active_zone != zone {
            trace!(id = %id, ?zone, corner = zone.is_corner(), "snap zone changed");
            state.active_zone = zone;
        }
        InputResult::Handled
    }

    /// Drop the window: snap into the armed zone or leave the one it was in
    ///
    /// A press and release without any move is a header click and leaves
    /// the snap untouched.
    pub fn end_drag(&mut self) -> InputResult {
        let (id, moved) = match self.input.session() {
            Some(PointerSession::Drag { window_id, moved, .. }) => (window_id.clone(), *moved),
            _ => return InputResult::Unhandled,
        };
        let zone = self
            .input
            .snap_state(&id)
            .map(|state| state.active_zone)
            .unwrap_or_default();
        self.input.end_session();

        if moved {
            if let Some(rect) = snap_dimensions(zone, &self.viewport) {
                self.registry.update_position(&id, rect.position());
                self.registry.update_size(&id, rect.size());
                self.input.snap_state_mut(&id).snapped_zone = zone;
                debug!(id = %id, ?zone, "window snapped");
                return InputResult::Snapped { window_id: id, zone };
            }

            let state = self.input.snap_state_mut(&id);
            if state.is_snapped() {
                state.snapped_zone = SnapZone::None;
                // Position stays at the drop point
                if let Some(pre_snap) = state.pre_snap.take() {
                    self.registry.update_size(&id, pre_snap.size);
                }
                debug!(id = %id, "window unsnapped");
            }
        }

        let state = self.input.snap_state_mut(&id);
        if !state.is_snapped() {
            state.pre_snap = None;
        }
        self.input.prune(&id);
        InputResult::Handled
    }

    /// Start resizing a window from one of its handles
    pub fn begin_resize(&mut self, id: &str, direction: ResizeDirection, pointer: Vec2) -> InputResult {
        if !self.accepts_gesture(id) {
            return InputResult::Unhandled;
        }
        let Some(start_rect) = self.registry.get(id).map(|w| w.rect()) else {
            return InputResult::Unhandled;
        };

        self.registry.focus(id);
        self.input
            .start_resize(id.to_string(), direction, start_rect, pointer);
        InputResult::Handled
    }

    /// Apply the capped resize for the current pointer position
    pub fn resize_move(&mut self, pointer: Vec2) -> InputResult {
        let (id, direction, start_rect, start_pointer) = match self.input.session() {
            Some(PointerSession::Resize {
                window_id,
                direction,
                start_rect,
                start_pointer,
            }) => (window_id.clone(), *direction, *start_rect, *start_pointer),
            _ => return InputResult::Unhandled,
        };

        let (position, size) = compute_resize(direction, start_rect, start_pointer, pointer, self.min_size());
        // A resized window no longer matches its zone
        let changed = Rect::from_pos_size(position, size) != start_rect;
        let state = self.input.snap_state_mut(&id);
        if changed && state.is_snapped() {
            state.snapped_zone = SnapZone::None;
            state.pre_snap = None;
            debug!(id = %id, "snap cleared by resize");
        }

        self.registry.update_size(&id, size);
        let shifted = self.registry.get(&id).is_some_and(|w| w.position != position);
        if direction.moves_origin() && shifted {
            self.registry.update_position(&id, position);
        }
        InputResult::Handled
    }

    /// Finish a resize
    pub fn end_resize(&mut self) -> InputResult {
        if !self.input.session().is_some_and(|s| s.is_resize()) {
            return InputResult::Unhandled;
        }
        self.input.end_session();
        InputResult::Handled
    }

    /// Route a pointer move to the active gesture
    pub fn handle_pointer_move(&mut self, pointer: Vec2) -> InputResult {
        match self.input.session() {
            Some(PointerSession::Drag { .. }) => self.drag_move(pointer),
            Some(PointerSession::Resize { .. }) => self.resize_move(pointer),
            None => InputResult::Unhandled,
        }
    }

    /// Route a pointer release to the active gesture
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.session() {
            Some(PointerSession::Drag { .. }) => self.end_drag(),
            Some(PointerSession::Resize { .. }) => self.end_resize(),
            None => InputResult::Unhandled,
        }
    }

    /// Tear down the current gesture without snapping
    pub fn cancel_interaction(&mut self) -> InputResult {
        InputResult::from_handled(self.input.end_session().is_some())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ShellConfig;
    use crate::geometry::{snap_dimensions, ResizeDirection, SnapZone};
    use crate::input::InputResult;
    use crate::math::{Rect, Size, Vec2};
    use crate::window::OpenRequest;
    use super::ShellEngine;

    fn engine_with(ids: &[&str]) -> ShellEngine {
        let mut engine = ShellEngine::new(ShellConfig::default(), 1600.0, 900.0);
        for id in ids {
            engine.open(OpenRequest::new(*id, *id, *id), 0.0);
        }
        engine.tick(1000.0);
        engine
    }

    #[test]
    fn test_drag_moves_by_offset() {
        let mut engine = engine_with(&["calc"]);
        engine.begin_drag("calc", Vec2::new(150.0, 60.0));
        engine.drag_move(Vec2::new(450.0, 360.0));

        let window = engine.registry().get("calc").unwrap();
        assert!((window.position.x - 400.0).abs() < 0.001);
        assert!((window.position.y - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_focuses_window() {
        let mut engine = engine_with(&["calc", "notes"]);
        engine.begin_drag("calc", Vec2::new(150.0, 60.0));
        assert_eq!(engine.registry().active_id(), Some("calc"));
    }

    #[test]
    fn test_snap_left_then_drag_out_restores_size() {
        let mut engine = engine_with(&["notes"]);
        engine.begin_drag("notes", Vec2::new(150.0, 60.0));
        engine.drag_move(Vec2::new(5.0, 400.0));
        let result = engine.end_drag();

        assert_eq!(
            result,
            InputResult::Snapped {
                window_id: "notes".to_string(),
                zone: SnapZone::Left,
            }
        );
        let snapped = engine.registry().get("notes").unwrap().rect();
        assert_eq!(Some(snapped), snap_dimensions(SnapZone::Left, engine.viewport()));

        engine.begin_drag("notes", Vec2::new(100.0, 40.0));
        engine.drag_move(Vec2::new(700.0, 400.0));
        assert_eq!(engine.end_drag(), InputResult::Handled);

        let window = engine.registry().get("notes").unwrap();
        assert!((window.size.width - 800.0).abs() < 0.001);
        assert!((window.size.height - 600.0).abs() < 0.001);
        // Position is the drop point, not the pre-snap position
        assert!((window.position.x - 600.0).abs() < 0.001);
        assert!((window.position.y - 388.0).abs() < 0.001);
        assert!(engine.input().snap_state("notes").is_none());
    }

    fn snap_left(engine: &mut ShellEngine, id: &str) -> Rect {
        engine.begin_drag(id, Vec2::new(150.0, 60.0));
        engine.drag_move(Vec2::new(5.0, 400.0));
        assert!(matches!(engine.end_drag(), InputResult::Snapped { .. }));
        engine.registry().get(id).unwrap().rect()
    }

    #[test]
    fn test_header_click_keeps_snap() {
        let mut engine = engine_with(&["notes"]);
        let snapped = snap_left(&mut engine, "notes");
        assert_eq!(snapped, Rect::new(0.0, 28.0, 800.0, 792.0));

        assert!(engine.begin_drag("notes", Vec2::new(400.0, 300.0)).is_handled());
        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);

        assert_eq!(engine.registry().get("notes").unwrap().rect(), snapped);
        let state = engine.input().snap_state("notes").unwrap();
        assert_eq!(state.snapped_zone, SnapZone::Left);
        assert!(state.pre_snap.is_some());
    }

    #[test]
    fn test_handle_click_keeps_snap() {
        let mut engine = engine_with(&["notes"]);
        let snapped = snap_left(&mut engine, "notes");

        assert!(engine.begin_resize("notes", ResizeDirection::E, Vec2::new(800.0, 400.0)).is_handled());
        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);

        assert_eq!(engine.registry().get("notes").unwrap().rect(), snapped);
        assert_eq!(
            engine.input().snap_state("notes").map(|s| s.snapped_zone),
            Some(SnapZone::Left)
        );
    }

    #[test]
    fn test_resize_move_clears_snap() {
        let mut engine = engine_with(&["notes"]);
        snap_left(&mut engine, "notes");

        engine.begin_resize("notes", ResizeDirection::E, Vec2::new(800.0, 400.0));
        assert!(engine.input().snap_state("notes").unwrap().is_snapped());
        engine.handle_pointer_move(Vec2::new(700.0, 400.0));
        engine.handle_pointer_up();

        let window = engine.registry().get("notes").unwrap();
        assert!((window.size.width - 700.0).abs() < 0.001);
        assert!(engine.input().snap_state("notes").is_none());
    }

    #[test]
    fn test_free_drag_leaves_no_snap_memory() {
        let mut engine = engine_with(&["calc"]);
        engine.begin_drag("calc", Vec2::new(150.0, 60.0));
        assert!(engine.input().snap_state("calc").unwrap().pre_snap.is_some());
        engine.drag_move(Vec2::new(450.0, 360.0));
        engine.end_drag();
        assert!(engine.input().snap_state("calc").is_none());

        // A bare header click on a free window leaves nothing behind either
        engine.begin_drag("calc", Vec2::new(450.0, 360.0));
        engine.handle_pointer_up();
        assert!(engine.input().snap_state("calc").is_none());
    }

    #[test]
    fn test_maximized_window_refuses_drag() {
        let mut engine = engine_with(&["safari"]);
        engine.toggle_maximize("safari");
        assert_eq!(engine.begin_drag("safari", Vec2::new(200.0, 40.0)), InputResult::Unhandled);
        assert_eq!(
            engine.begin_resize("safari", ResizeDirection::SE, Vec2::new(200.0, 40.0)),
            InputResult::Unhandled
        );
        assert!(!engine.input().is_capturing());
    }

    #[test]
    fn test_moves_without_session_are_ignored() {
        let mut engine = engine_with(&["calc"]);
        let before = engine.registry().get("calc").unwrap().rect();
        assert_eq!(engine.handle_pointer_move(Vec2::new(5.0, 5.0)), InputResult::Unhandled);
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
        assert_eq!(engine.registry().get("calc").unwrap().rect(), before);
    }

    #[test]
    fn test_cancel_does_not_snap() {
        let mut engine = engine_with(&["calc"]);
        engine.begin_drag("calc", Vec2::new(150.0, 60.0));
        engine.drag_move(Vec2::new(5.0, 400.0));
        assert!(engine.cancel_interaction().is_handled());

        let window = engine.registry().get("calc").unwrap();
        assert!((window.size.width - 800.0).abs() < 0.001);
        assert!(!engine.input().snap_state("calc").is_some_and(|s| s.is_snapped()));
        assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
    }

    #[test]
    fn test_resize_northwest_shifts_origin() {
        let mut engine = engine_with(&["notes"]);
        engine.begin_resize("notes", ResizeDirection::SE, Vec2::new(900.0, 650.0));
        engine.resize_move(Vec2::new(500.0, 350.0));
        engine.end_resize();
        let window = engine.registry().get("notes").unwrap();
        assert!((window.size.width - 400.0).abs() < 0.001);
        assert!((window.size.height - 300.0).abs() < 0.001);

        engine.begin_resize("notes", ResizeDirection::NW, Vec2::new(100.0, 50.0));
        engine.resize_move(Vec2::new(50.0, 0.0));
        engine.end_resize();

        let window = engine.registry().get("notes").unwrap();
        assert!((window.size.width - 450.0).abs() < 0.001);
        assert!((window.size.height - 350.0).abs() < 0.001);
        assert!((window.position.x - 50.0).abs() < 0.001);
        assert!((window.position.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_never_below_minimum() {
        let mut engine = engine_with(&["calc"]);
        let pointers = [
            Vec2::new(2000.0, 2000.0),
            Vec2::new(-500.0, -500.0),
            Vec2::new(850.0, 600.0),
            Vec2::new(99999.0, 10.0),
        ];
        for direction in [ResizeDirection::NW, ResizeDirection::SE, ResizeDirection::NE, ResizeDirection::SW] {
            engine.begin_resize("calc", direction, Vec2::new(500.0, 300.0));
            for pointer in pointers {
                engine.handle_pointer_move(pointer);
                let size = engine.registry().get("calc").unwrap().size;
                assert!(size.fits_min(Size::new(300.0, 200.0)));
            }
            engine.handle_pointer_up();
        }
    }

    #[test]
    fn test_close_cancels_drag_session() {
        let mut engine = engine_with(&["calc"]);
        engine.begin_drag("calc", Vec2::new(150.0, 60.0));
        engine.close("calc", 2000.0);
        assert!(!engine.input().is_capturing());
    }

    #[test]
    fn test_new_gesture_replaces_previous() {
        let mut engine = engine_with(&["calc", "notes"]);
        engine.begin_drag("calc", Vec2::new(150.0, 60.0));
        engine.begin_resize("notes", ResizeDirection::E, Vec2::new(920.0, 300.0));

        let session = engine.input().session().unwrap();
        assert!(session.is_resize());
        assert_eq!(session.window_id(), "notes");
        assert!(!engine.input().snap_state("calc").is_some_and(|s| s.is_dragging));
    }
}
