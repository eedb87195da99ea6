//! Read-only render view of the active desktop

use serde::Serialize;
use crate::desktop::{Desktop, DesktopId};
use crate::geometry::{snap_dimensions, SnapZone};
use crate::input::PointerSession;
use crate::math::Rect;
use crate::transition::{AnimationFrame, LifecyclePhase};
use crate::viewport::Viewport;
use crate::window::WindowId;
use super::ShellEngine;

/// One window as the renderer should draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub component_key: String,
    /// Drawn rectangle (the maximized area while maximized)
    pub rect: Rect,
    pub z_index: u32,
    pub is_active: bool,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub snapped_zone: SnapZone,
    pub phase: LifecyclePhase,
    pub frame: AnimationFrame,
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub viewport: Viewport,
    pub active_desktop: DesktopId,
    pub desktops: Vec<Desktop>,
    pub active_window_id: Option<WindowId>,
    /// Windows back to front
    pub windows: Vec<WindowView>,
    /// Zone outline shown while a drag hovers a snap zone
    pub snap_preview: Option<Rect>,
}

impl ShellEngine {
    /// Build the render view at `now_ms`
    ///
    /// Windows playing an outgoing animation are included until their
    /// timer fires.
    pub fn snapshot(&self, now_ms: f64) -> RenderSnapshot {
        let active_desktop = self.desktops.active();
        let active_id = self.registry.active_id();

        let windows = self
            .registry
            .windows_by_z(active_desktop)
            .into_iter()
            .filter_map(|window| {
                let phase = self.animator.phase(&window.id).unwrap_or_default();
                // Leaving windows stay mounted until their animation ends
                let rendered = phase.is_rendered() && (window.is_visible() || phase.is_leaving());
                if !rendered {
                    return None;
                }
                Some(WindowView {
                    id: window.id.clone(),
                    title: window.title.clone(),
                    component_key: window.component_key.clone(),
                    rect: window.effective_rect(&self.viewport),
                    z_index: window.z_index,
                    is_active: active_id == Some(window.id.as_str()),
                    is_maximized: window.is_maximized,
                    is_minimized: window.is_minimized,
                    snapped_zone: self
                        .input
                        .snap_state(&window.id)
                        .map(|state| state.snapped_zone)
                        .unwrap_or_default(),
                    phase,
                    frame: self.animator.frame_at(&window.id, now_ms),
                })
            })
            .collect();

        RenderSnapshot {
            viewport: self.viewport,
            active_desktop,
            desktops: self.desktops.desktops().to_vec(),
            active_window_id: active_id.map(str::to_string),
            windows,
            snap_preview: self.snap_preview(),
        }
    }

    /// Target rectangle of the zone under the dragged window
    fn snap_preview(&self) -> Option<Rect> {
        let Some(PointerSession::Drag { window_id, .. }) = self.input.session() else {
            return None;
        };
        let zone = self.input.snap_state(window_id)?.active_zone;
        snap_dimensions(zone, &self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ShellConfig;
    use crate::math::{Rect, Vec2};
    use crate::transition::LifecyclePhase;
    use crate::window::OpenRequest;
    use super::ShellEngine;

    fn engine() -> ShellEngine {
        let mut engine = ShellEngine::new(ShellConfig::default(), 1600.0, 900.0);
        engine.open(OpenRequest::new("calc", "Calculator", "Calculator"), 0.0);
        engine.open(OpenRequest::new("notes", "Notes", "Notes"), 0.0);
        engine.tick(1000.0);
        engine
    }

    #[test]
    fn test_windows_back_to_front() {
        let engine = engine();
        let snapshot = engine.snapshot(1000.0);

        let ids: Vec<&str> = snapshot.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["calc", "notes"]);
        assert!(snapshot.windows[1].is_active);
        assert!(!snapshot.windows[0].is_active);
        assert_eq!(snapshot.active_window_id.as_deref(), Some("notes"));
    }

    #[test]
    fn test_closing_window_stays_until_timer() {
        let mut engine = engine();
        engine.close("calc", 2000.0);

        let snapshot = engine.snapshot(2100.0);
        let calc = snapshot.windows.iter().find(|w| w.id == "calc").unwrap();
        assert_eq!(calc.phase, LifecyclePhase::Closing);
        assert!(calc.frame.opacity < 1.0);

        engine.tick(2200.0);
        let snapshot = engine.snapshot(2200.0);
        assert!(snapshot.windows.iter().all(|w| w.id != "calc"));
    }

    #[test]
    fn test_maximized_rect_covers_dock() {
        let mut engine = engine();
        engine.toggle_maximize("notes");
        let snapshot = engine.snapshot(1000.0);
        let notes = snapshot.windows.iter().find(|w| w.id == "notes").unwrap();
        assert_eq!(notes.rect, Rect::new(0.0, 28.0, 1600.0, 872.0));
    }

    #[test]
    fn test_snap_preview_during_drag() {
        let mut engine = engine();
        engine.begin_drag("calc", Vec2::new(150.0, 60.0));
        engine.drag_move(Vec2::new(1598.0, 5.0));

        let preview = engine.snapshot(1000.0).snap_preview.unwrap();
        assert_eq!(preview, Rect::new(800.0, 28.0, 800.0, 396.0));

        engine.end_drag();
        assert!(engine.snapshot(1000.0).snap_preview.is_none());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(engine().snapshot(1000.0)).unwrap();
        assert_eq!(json["activeWindowId"], "notes");
        assert_eq!(json["windows"][0]["componentKey"], "Calculator");
        assert_eq!(json["windows"][0]["phase"], "steady");
        assert!(json["snapPreview"].is_null());
    }
}
