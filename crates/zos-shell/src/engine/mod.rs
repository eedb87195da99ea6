//! Shell engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle and animated transitions
//! - `input`: Pointer handlers for drag, snap, and resize
//! - `desktops`: Desktop switching and window placement
//! - `commands`: Reducer-style command dispatch
//! - `snapshot`: Read-only render view

mod windows;
mod input;
mod desktops;
mod commands;
mod snapshot;

use tracing::debug;
use crate::config::ShellConfig;
use crate::desktop::DesktopList;
use crate::geometry::{snap_dimensions, SnapZone};
use crate::input::InputRouter;
use crate::math::Size;
use crate::transition::{DockAnchors, LifecycleAnimator, NoDock};
use crate::viewport::Viewport;
use crate::window::{WindowId, WindowRegistry};

pub use commands::Command;
pub use snapshot::{RenderSnapshot, WindowView};

/// Shell engine owning all window manager state
///
/// This is the main entry point for shell operations, managing:
/// - Window registry (records, focus, z-order)
/// - Desktops (which windows are shown)
/// - Input router (pointer sessions and snap memory)
/// - Lifecycle animator (open/minimize/close animations and their timers)
pub struct ShellEngine {
    config: ShellConfig,
    viewport: Viewport,
    registry: WindowRegistry,
    desktops: DesktopList,
    input: InputRouter,
    animator: LifecycleAnimator,
    /// Locates dock icons for the genie animation
    dock: Box<dyn DockAnchors>,
}

impl ShellEngine {
    /// Create an engine for a page of the given size
    pub fn new(config: ShellConfig, width: f32, height: f32) -> Self {
        let viewport = Viewport::new(width, height, &config);
        Self {
            config,
            viewport,
            registry: WindowRegistry::new(),
            desktops: DesktopList::new(),
            input: InputRouter::new(),
            animator: LifecycleAnimator::new(),
            dock: Box::new(NoDock),
        }
    }

    /// Use `dock` to locate minimize targets
    pub fn with_dock(mut self, dock: impl DockAnchors + 'static) -> Self {
        self.dock = Box::new(dock);
        self
    }

    /// Replace the dock locator
    pub fn set_dock(&mut self, dock: impl DockAnchors + 'static) {
        self.dock = Box::new(dock);
    }

    #[inline]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    #[inline]
    pub fn desktops(&self) -> &DesktopList {
        &self.desktops
    }

    #[inline]
    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    #[inline]
    pub fn animator(&self) -> &LifecycleAnimator {
        &self.animator
    }

    /// Minimum window size from the config
    #[inline]
    pub(crate) fn min_size(&self) -> Size {
        Size::new(self.config.min_width, self.config.min_height)
    }

    /// Resize the page and move snapped windows into their new zones
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height, &self.config);

        let snapped: Vec<(WindowId, SnapZone)> = self
            .input
            .snapped_windows()
            .map(|(id, state)| (id.clone(), state.snapped_zone))
            .collect();

        for (id, zone) in snapped {
            if let Some(rect) = snap_dimensions(zone, &self.viewport) {
                self.registry.update_position(&id, rect.position());
                self.registry.update_size(&id, rect.size());
            }
        }
        debug!(width, height, "viewport resized");
    }
}
