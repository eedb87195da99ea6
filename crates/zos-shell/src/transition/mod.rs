//! Window lifecycle transitions
//!
//! Visual state is decoupled from registry state: a window keeps rendering
//! its outgoing animation until the deferred timer fires, and only then is
//! the registry mutation applied.

mod easing;
mod animation;
mod genie;
mod lifecycle;
mod timer;
mod animator;

pub use easing::{ease_in_cubic, ease_in_out, ease_out_cubic};
pub use animation::{AnimationFrame, AnimationKind, WindowAnimation};
pub use genie::{minimize_target, DockAnchors, GenieTarget, NoDock};
pub use lifecycle::{LifecycleEvent, LifecyclePhase};
pub use timer::{DeferredTask, FiredTimer, TimerHandle, TimerQueue};
pub use animator::{Completion, LifecycleAnimator};
