//! Desktop switching and window placement

use crate::desktop::DesktopId;
use crate::window::WindowId;
use super::ShellEngine;

impl ShellEngine {
    /// Add a desktop and return its id
    pub fn create_desktop(&mut self, name: &str) -> DesktopId {
        self.desktops.create(name)
    }

    /// Show another desktop and focus its top-most window
    pub fn switch_desktop(&mut self, id: DesktopId) -> bool {
        if !self.desktops.switch_to(id) {
            return false;
        }
        self.input.end_session();
        self.focus_top_window(id);
        true
    }

    /// Remove a desktop, moving its windows to the active one
    pub fn remove_desktop(&mut self, id: DesktopId) -> bool {
        let was_active = self.desktops.active() == id;
        let Some(target) = self.desktops.remove(id) else {
            return false;
        };

        let orphans: Vec<WindowId> = self
            .registry
            .iter()
            .filter(|w| w.desktop_id == id)
            .map(|w| w.id.clone())
            .collect();
        for window_id in &orphans {
            self.registry.set_desktop(window_id, target);
        }

        if was_active {
            self.input.end_session();
            self.focus_top_window(target);
        }
        true
    }

    /// Move a window to another desktop
    pub fn move_to_desktop(&mut self, window_id: &str, desktop_id: DesktopId) -> bool {
        if !self.desktops.contains(desktop_id) || !self.registry.contains(window_id) {
            return false;
        }
        self.input.cancel_for(window_id);
        self.registry.set_desktop(window_id, desktop_id);

        let active_desktop = self.desktops.active();
        if desktop_id != active_desktop && self.registry.active_id() == Some(window_id) {
            self.focus_top_window(active_desktop);
        }
        true
    }

    /// Focus the top-most visible window of a desktop, or clear focus
    fn focus_top_window(&mut self, desktop_id: DesktopId) {
        match self.registry.top_window_on(desktop_id).map(|w| w.id.clone()) {
            Some(top) => {
                self.registry.focus(&top);
            }
            None => self.registry.clear_active(),
        }
    }
}
