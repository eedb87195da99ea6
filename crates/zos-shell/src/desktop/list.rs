//! Ordered list of desktops with one active desktop

use tracing::debug;
use super::{Desktop, DesktopId};

/// Desktops in display order
#[derive(Clone, Debug)]
pub struct DesktopList {
    desktops: Vec<Desktop>,
    active: DesktopId,
    next_id: DesktopId,
}

impl Default for DesktopList {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopList {
    /// Create a list holding a single "Desktop 1"
    pub fn new() -> Self {
        Self {
            desktops: vec![Desktop::new(1, "Desktop 1")],
            active: 1,
            next_id: 2,
        }
    }

    /// Append a desktop and return its id
    pub fn create(&mut self, name: &str) -> DesktopId {
        let id = self.next_id;
        self.next_id += 1;
        self.desktops.push(Desktop::new(id, name));
        id
    }

    /// Make `id` the active desktop; false if it does not exist
    pub fn switch_to(&mut self, id: DesktopId) -> bool {
        if !self.contains(id) {
            return false;
        }
        debug!(from = self.active, to = id, "switching desktop");
        self.active = id;
        true
    }

    /// Remove a desktop, refusing to remove the last one
    ///
    /// If the active desktop is removed, its left neighbour (or the new
    /// first desktop) becomes active. Returns the desktop that should
    /// receive the orphaned windows.
    pub fn remove(&mut self, id: DesktopId) -> Option<DesktopId> {
        if self.desktops.len() <= 1 {
            return None;
        }
        let index = self.desktops.iter().position(|d| d.id == id)?;
        self.desktops.remove(index);

        if self.active == id {
            let fallback = index.saturating_sub(1).min(self.desktops.len() - 1);
            self.active = self.desktops[fallback].id;
        }
        Some(self.active)
    }

    /// Active desktop id
    #[inline]
    pub fn active(&self) -> DesktopId {
        self.active
    }

    #[inline]
    pub fn contains(&self, id: DesktopId) -> bool {
        self.desktops.iter().any(|d| d.id == id)
    }

    /// Desktops in display order
    #[inline]
    pub fn desktops(&self) -> &[Desktop] {
        &self.desktops
    }
}
