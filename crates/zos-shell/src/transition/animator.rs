//! Lifecycle animator: phases, running animations, and their timers

use std::collections::HashMap;
use tracing::debug;
use crate::window::WindowId;
use super::{
    AnimationFrame, AnimationKind, DeferredTask, GenieTarget, LifecycleEvent, LifecyclePhase,
    TimerHandle, TimerQueue, WindowAnimation,
};

/// Deferred registry mutation whose timer fired on a live window
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub window_id: WindowId,
    pub task: DeferredTask,
}

#[derive(Clone, Debug)]
struct LifecycleEntry {
    phase: LifecyclePhase,
    animation: Option<WindowAnimation>,
    /// Timer that finishes the current animation
    timer: Option<TimerHandle>,
}

/// Visual lifecycle of every tracked window
#[derive(Debug, Default)]
pub struct LifecycleAnimator {
    entries: HashMap<WindowId, LifecycleEntry>,
    timers: TimerQueue,
}

impl LifecycleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase of a window
    pub fn phase(&self, id: &str) -> Option<LifecyclePhase> {
        self.entries.get(id).map(|e| e.phase)
    }

    /// Animation a window is playing, if any
    pub fn animation(&self, id: &str) -> Option<&WindowAnimation> {
        self.entries.get(id).and_then(|e| e.animation.as_ref())
    }

    /// Sampled visual state; windows without an animation are at rest
    pub fn frame_at(&self, id: &str, now_ms: f64) -> AnimationFrame {
        self.animation(id)
            .map(|anim| anim.frame_at(now_ms))
            .unwrap_or(AnimationFrame::STEADY)
    }

    /// Start the open animation for a new, restored, or reopened window
    ///
    /// Interrupts any outgoing animation and cancels its timer. A window
    /// already open (`Initial` or `Steady`) is left alone.
    pub fn begin_open(&mut self, id: &str, now_ms: f64, duration_ms: f64) -> bool {
        if !self.entries.contains_key(id) {
            let animation = WindowAnimation::new(AnimationKind::Open, now_ms, duration_ms);
            let timer = self.timers.schedule(id, DeferredTask::FinishOpen, animation.end_ms());
            self.entries.insert(
                id.to_string(),
                LifecycleEntry {
                    phase: LifecyclePhase::Initial,
                    animation: Some(animation),
                    timer: Some(timer),
                },
            );
            debug!(id, "window mounted");
            return true;
        }

        let animation = WindowAnimation::new(AnimationKind::Open, now_ms, duration_ms);
        self.transition(id, LifecycleEvent::Reopened, Some((animation, DeferredTask::FinishOpen)))
    }

    /// Renderer finished mounting; skips the rest of the open animation
    pub fn mounted(&mut self, id: &str) -> bool {
        self.transition(id, LifecycleEvent::Mounted, None)
    }

    /// Start the genie animation toward `target`
    pub fn begin_minimize(&mut self, id: &str, target: GenieTarget, now_ms: f64, duration_ms: f64) -> bool {
        let animation = WindowAnimation::new(AnimationKind::Minimize { target }, now_ms, duration_ms);
        self.transition(id, LifecycleEvent::MinimizeRequested, Some((animation, DeferredTask::FinishMinimize)))
    }

    /// Start the close animation; a window already closing is left alone
    pub fn begin_close(&mut self, id: &str, now_ms: f64, duration_ms: f64) -> bool {
        let animation = WindowAnimation::new(AnimationKind::Close, now_ms, duration_ms);
        self.transition(id, LifecycleEvent::CloseRequested, Some((animation, DeferredTask::FinishClose)))
    }

    /// Apply a table transition, replacing the running animation and timer
    fn transition(
        &mut self,
        id: &str,
        event: LifecycleEvent,
        next_animation: Option<(WindowAnimation, DeferredTask)>,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        let Some(next) = entry.phase.next(event) else {
            return false;
        };

        if let Some(handle) = entry.timer.take() {
            self.timers.cancel(handle);
        }
        debug!(id, from = ?entry.phase, to = ?next, "lifecycle transition");
        entry.phase = next;
        entry.animation = next_animation.map(|(animation, _)| animation);
        entry.timer = next_animation
            .map(|(animation, task)| self.timers.schedule(id, task, animation.end_ms()));
        true
    }

    /// Fire due timers and return the mutations the registry should apply
    ///
    /// A timer only completes if its window is still tracked and the timer
    /// is the one currently attached to it; anything else is stale.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Completion> {
        let mut completions = Vec::new();

        for fired in self.timers.drain_due(now_ms) {
            let Some(entry) = self.entries.get_mut(&fired.window_id) else {
                debug!(id = %fired.window_id, "dropping timer of untracked window");
                continue;
            };
            if entry.timer != Some(fired.handle) {
                debug!(id = %fired.window_id, "dropping stale timer");
                continue;
            }

            let event = match fired.task {
                DeferredTask::FinishOpen => LifecycleEvent::Mounted,
                DeferredTask::FinishMinimize | DeferredTask::FinishClose => {
                    LifecycleEvent::AnimationFinished
                }
            };
            entry.timer = None;
            let Some(next) = entry.phase.next(event) else {
                continue;
            };
            entry.phase = next;
            entry.animation = None;

            completions.push(Completion {
                window_id: fired.window_id,
                task: fired.task,
            });
        }

        completions
    }

    /// Stop tracking a window and cancel its timers
    pub fn forget(&mut self, id: &str) {
        self.entries.remove(id);
        self.timers.cancel_window(id);
    }

    /// Number of timers still waiting
    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
