//! Window lifecycle and operations

use tracing::debug;
use crate::config::EvictionPolicy;
use crate::transition::{minimize_target, Completion, DeferredTask, LifecyclePhase};
use crate::window::{OpenRequest, WindowRecord};
use super::ShellEngine;

impl ShellEngine {
    /// Open a window on the active desktop, or reactivate an existing one
    pub fn open(&mut self, request: OpenRequest, now_ms: f64) -> &WindowRecord {
        let desktop_id = self.desktops.active();
        self.animator
            .begin_open(&request.id, now_ms, self.config.open_duration_ms);
        self.registry
            .open(request, desktop_id, &self.viewport, &self.config)
    }

    /// Start the close animation
    ///
    /// The record is marked closed once the animation's timer fires.
    /// Closing a window that is already closing (or closed) does nothing.
    pub fn close(&mut self, id: &str, now_ms: f64) -> bool {
        match self.registry.get(id) {
            Some(window) if window.is_open => {}
            _ => return false,
        }

        // Minimized windows are not rendered, so there is nothing to animate
        if matches!(self.animator.phase(id), None | Some(LifecyclePhase::Removed)) {
            self.input.cancel_for(id);
            self.finish_close(id);
            return true;
        }

        if !self
            .animator
            .begin_close(id, now_ms, self.config.close_duration_ms)
        {
            return false;
        }
        self.input.cancel_for(id);
        true
    }

    /// Start the genie animation toward the window's dock icon
    pub fn minimize(&mut self, id: &str, now_ms: f64) -> bool {
        if !self.registry.get(id).is_some_and(|w| w.is_visible()) {
            return false;
        }
        let Some(window_rect) = self.registry.effective_rect(id, &self.viewport) else {
            return false;
        };

        let anchor = self.dock.locate(id);
        if anchor.is_none() {
            debug!(id, "no dock anchor, minimizing toward bottom center");
        }
        let target = minimize_target(window_rect, anchor, &self.viewport);

        if !self
            .animator
            .begin_minimize(id, target, now_ms, self.config.minimize_duration_ms)
        {
            return false;
        }
        self.input.cancel_for(id);
        true
    }

    /// Toggle maximize; stored geometry is kept for restore
    pub fn toggle_maximize(&mut self, id: &str) -> bool {
        self.input.cancel_for(id);
        self.registry.toggle_maximize(id)
    }

    /// Focus a window, restoring it if it is minimized
    pub fn focus(&mut self, id: &str, now_ms: f64) -> bool {
        match self.registry.get(id) {
            Some(window) if window.is_open => {}
            _ => return false,
        }

        // Restoring from the dock, or interrupting a minimize in flight
        if matches!(
            self.animator.phase(id),
            Some(LifecyclePhase::Minimizing | LifecyclePhase::Removed)
        ) {
            self.animator
                .begin_open(id, now_ms, self.config.open_duration_ms);
        }
        self.registry.focus(id)
    }

    /// Pointer pressed inside a window's content area
    #[inline]
    pub fn pointer_down_in_content(&mut self, id: &str, now_ms: f64) -> bool {
        self.focus(id, now_ms)
    }

    /// Renderer finished mounting a window
    pub fn mounted(&mut self, id: &str) -> bool {
        self.animator.mounted(id)
    }

    /// Drop a window record and everything attached to it
    pub fn evict(&mut self, id: &str) -> bool {
        self.input.forget(id);
        self.animator.forget(id);
        let removed = self.registry.remove(id).is_some();
        if removed {
            debug!(id, "evicted window");
        }
        removed
    }

    /// Advance timers and apply the registry mutations they defer
    pub fn tick(&mut self, now_ms: f64) -> Vec<Completion> {
        let completions = self.animator.tick(now_ms);

        for completion in &completions {
            let id = completion.window_id.as_str();
            if !self.registry.contains(id) {
                debug!(id, "completion for missing window dropped");
                continue;
            }
            match completion.task {
                DeferredTask::FinishOpen => {}
                DeferredTask::FinishMinimize => {
                    self.registry.minimize(id);
                    debug!(id, "window minimized");
                }
                DeferredTask::FinishClose => self.finish_close(id),
            }
        }

        completions
    }

    /// Apply a close to the registry and the eviction policy
    fn finish_close(&mut self, id: &str) {
        self.registry.close(id);
        debug!(id, "window closed");
        if self.config.eviction == EvictionPolicy::AfterClose {
            self.evict(id);
        }
    }
}
