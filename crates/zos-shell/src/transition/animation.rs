//! Time-bounded window animations

use serde::Serialize;
use crate::math::Vec2;
use super::{ease_in_cubic, ease_in_out, ease_out_cubic, GenieTarget};

/// Scale a window opens from
const OPEN_FROM_SCALE: f32 = 0.95;
/// Scale a closing window shrinks to
const CLOSE_TO_SCALE: f32 = 0.9;
/// Blur radius (px) at the end of the close animation
const CLOSE_BLUR: f32 = 4.0;

/// Which animation a window is playing
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnimationKind {
    Open,
    Minimize { target: GenieTarget },
    Close,
}

/// Visual properties at one instant of an animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnimationFrame {
    pub opacity: f32,
    pub scale: f32,
    pub translate: Vec2,
    pub blur: f32,
}

impl AnimationFrame {
    /// Resting state of a fully open window
    pub const STEADY: AnimationFrame = AnimationFrame {
        opacity: 1.0,
        scale: 1.0,
        translate: Vec2::ZERO,
        blur: 0.0,
    };
}

/// One running animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowAnimation {
    pub kind: AnimationKind,
    /// Start time (ms timestamp)
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl WindowAnimation {
    pub fn new(kind: AnimationKind, start_ms: f64, duration_ms: f64) -> Self {
        Self { kind, start_ms, duration_ms }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.start_ms) / self.duration_ms) as f32).clamp(0.0, 1.0)
    }

    /// Time at which the animation ends
    #[inline]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// Sample the animation
    pub fn frame_at(&self, now_ms: f64) -> AnimationFrame {
        let t = self.progress(now_ms);

        match self.kind {
            AnimationKind::Open => {
                let e = ease_out_cubic(t);
                AnimationFrame {
                    opacity: e,
                    scale: OPEN_FROM_SCALE + (1.0 - OPEN_FROM_SCALE) * e,
                    translate: Vec2::ZERO,
                    blur: 0.0,
                }
            }
            AnimationKind::Minimize { target } => {
                let e = ease_in_out(t);
                AnimationFrame {
                    opacity: 1.0 - e,
                    scale: 1.0 + (target.scale - 1.0) * e,
                    translate: Vec2::lerp(Vec2::ZERO, target.translate, e),
                    blur: target.blur * e,
                }
            }
            AnimationKind::Close => {
                let e = ease_in_cubic(t);
                AnimationFrame {
                    opacity: 1.0 - e,
                    scale: 1.0 + (CLOSE_TO_SCALE - 1.0) * e,
                    translate: Vec2::ZERO,
                    blur: CLOSE_BLUR * e,
                }
            }
        }
    }
}
