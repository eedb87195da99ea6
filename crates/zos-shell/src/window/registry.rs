//! Window registry for lifecycle, focus, and z-order
//!
//! The registry is the single mutable source of truth for window state.
//! Every operation on an unknown id is a silent no-op.

use tracing::debug;
use crate::config::ShellConfig;
use crate::desktop::DesktopId;
use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;
use super::{OpenRequest, WindowId, WindowRecord};

/// Inset from the viewport edge used by the compact layout
const NARROW_INSET: f32 = 10.0;
/// Share of the usable height a window takes in the compact layout
const NARROW_HEIGHT_RATIO: f32 = 0.7;

/// Ordered collection of window records plus the focus state
#[derive(Debug, Default)]
pub struct WindowRegistry {
    /// Records in creation order
    windows: Vec<WindowRecord>,
    /// Currently focused window, a lookup key into `windows`
    active: Option<WindowId>,
    /// Highest z-index handed out so far
    z_counter: u32,
}

impl WindowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a window, or reactivate the record with the same id
    ///
    /// Reactivation keeps the record's last geometry and moves it to
    /// `desktop_id`. Both paths bump the z counter and focus the window.
    pub fn open(
        &mut self,
        request: OpenRequest,
        desktop_id: DesktopId,
        viewport: &Viewport,
        config: &ShellConfig,
    ) -> &WindowRecord {
        let z_index = self.next_z();

        let index = match self.index_of(&request.id) {
            Some(index) => {
                let window = &mut self.windows[index];
                window.is_open = true;
                window.is_minimized = false;
                window.z_index = z_index;
                window.desktop_id = desktop_id;
                debug!(id = %window.id, z_index, "reactivated window");
                index
            }
            None => {
                let (position, size) = self.default_geometry(viewport, config);
                debug!(id = %request.id, x = position.x, y = position.y, "created window");
                self.windows.push(WindowRecord {
                    id: request.id,
                    title: request.title,
                    component_key: request.component_key,
                    is_open: true,
                    is_minimized: false,
                    is_maximized: false,
                    z_index,
                    position,
                    size,
                    desktop_id,
                });
                self.windows.len() - 1
            }
        };

        self.active = Some(self.windows[index].id.clone());
        &self.windows[index]
    }

    /// Staggered default position and viewport-dependent default size
    fn default_geometry(&self, viewport: &Viewport, config: &ShellConfig) -> (Vec2, Size) {
        let count = self.windows.len() as f32;
        let offset = count * config.stagger;
        let usable = viewport.usable_rect();
        let min = Size::new(config.min_width, config.min_height);

        if viewport.is_narrow() {
            let size = Size::new(
                viewport.width() - NARROW_INSET * 2.0,
                usable.height * NARROW_HEIGHT_RATIO,
            )
            .at_least(min);
            let max_x = (viewport.width() - size.width).max(0.0);
            let max_y = (usable.bottom() - size.height).max(usable.y);
            let position = Vec2::new(
                (NARROW_INSET + offset).min(max_x),
                (usable.y + NARROW_INSET + offset).min(max_y),
            );
            (position, size)
        } else {
            let size = Size::new(config.default_width, config.default_height)
                .at_most(usable.size())
                .at_least(min);
            let max_x = (viewport.width() - size.width).max(0.0);
            let position = Vec2::new(
                (config.base_x + offset).min(max_x),
                (config.base_y + offset).max(usable.y),
            );
            (position, size)
        }
    }

    /// Mark a window closed, keeping its geometry
    ///
    /// Returns true if the window was open.
    pub fn close(&mut self, id: &str) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        let was_open = window.is_open;
        window.is_open = false;
        self.clear_active_if(id);
        was_open
    }

    /// Minimize a window; focus is dropped only if it held it
    pub fn minimize(&mut self, id: &str) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.is_minimized = true;
        self.clear_active_if(id);
        true
    }

    /// Flip the maximized flag; stored geometry is preserved for restore
    pub fn toggle_maximize(&mut self, id: &str) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.is_maximized = !window.is_maximized;
        debug!(id, maximized = window.is_maximized, "toggled maximize");
        true
    }

    /// Focus a window: restore it, raise it, make it active
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let z_index = self.next_z();
        let window = &mut self.windows[index];
        window.is_minimized = false;
        window.z_index = z_index;
        self.active = Some(window.id.clone());
        true
    }

    /// Set position without clamping
    pub fn update_position(&mut self, id: &str, position: Vec2) {
        if let Some(window) = self.get_mut(id) {
            window.position = position;
        }
    }

    /// Set size without clamping
    pub fn update_size(&mut self, id: &str, size: Size) {
        if let Some(window) = self.get_mut(id) {
            window.size = size;
        }
    }

    /// Move a window to another desktop
    pub fn set_desktop(&mut self, id: &str, desktop_id: DesktopId) {
        if let Some(window) = self.get_mut(id) {
            window.desktop_id = desktop_id;
        }
    }

    /// Drop a record entirely
    pub fn remove(&mut self, id: &str) -> Option<WindowRecord> {
        let index = self.index_of(id)?;
        self.clear_active_if(id);
        Some(self.windows.remove(index))
    }

    /// Clear focus without touching any window
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Currently focused window id
    #[inline]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Drawn geometry of a window, accounting for maximize
    pub fn effective_rect(&self, id: &str, viewport: &Viewport) -> Option<Rect> {
        self.get(id).map(|w| w.effective_rect(viewport))
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Check whether a record exists for `id`
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// All records in creation order
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter()
    }

    /// Records of one desktop, back to front
    pub fn windows_by_z(&self, desktop_id: DesktopId) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self
            .windows
            .iter()
            .filter(|w| w.desktop_id == desktop_id)
            .collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Top-most open, non-minimized window of a desktop
    pub fn top_window_on(&self, desktop_id: DesktopId) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| w.desktop_id == desktop_id && w.is_visible())
            .max_by_key(|w| w.z_index)
    }

    /// Number of records, open or closed
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn next_z(&mut self) -> u32 {
        self.z_counter += 1;
        self.z_counter
    }

    fn clear_active_if(&mut self, id: &str) {
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }
}
