//! Per-window visual lifecycle state machine

use serde::Serialize;

/// Visual phase of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecyclePhase {
    /// Mounted, playing the open animation
    #[default]
    Initial,
    /// Fully open
    Steady,
    /// Playing the genie animation toward the dock
    Minimizing,
    /// Playing the close animation
    Closing,
    /// Not rendered (minimized or closed)
    Removed,
}

/// Inputs to the lifecycle state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Mounted,
    MinimizeRequested,
    CloseRequested,
    AnimationFinished,
    Reopened,
}

impl LifecyclePhase {
    /// Transition table; `None` means the event is ignored in this phase
    pub fn next(self, event: LifecycleEvent) -> Option<LifecyclePhase> {
        use LifecycleEvent::*;
        use LifecyclePhase::*;

        match (self, event) {
            (Initial, Mounted) => Some(Steady),
            (Initial | Steady, MinimizeRequested) => Some(Minimizing),
            (Initial | Steady | Minimizing, CloseRequested) => Some(Closing),
            (Minimizing | Closing, AnimationFinished) => Some(Removed),
            (Minimizing | Closing | Removed, Reopened) => Some(Initial),
            _ => None,
        }
    }

    /// Whether the renderer should keep the window mounted
    #[inline]
    pub fn is_rendered(self) -> bool {
        self != LifecyclePhase::Removed
    }

    /// Phases with an outgoing animation in flight
    #[inline]
    pub fn is_leaving(self) -> bool {
        matches!(self, LifecyclePhase::Minimizing | LifecyclePhase::Closing)
    }
}
