//! Minimize ("genie") target computation

use serde::Serialize;
use crate::math::{Rect, Vec2};
use crate::viewport::Viewport;

/// Scale a minimizing window shrinks to
pub const GENIE_SCALE: f32 = 0.1;
/// Blur radius (px) at the end of the genie effect
pub const GENIE_BLUR: f32 = 10.0;

/// Lookup of dock icon rectangles by window id
///
/// Supplied by the renderer so the core never touches the page tree.
pub trait DockAnchors {
    /// On-screen rectangle of the dock icon for `window_id`
    fn locate(&self, window_id: &str) -> Option<Rect>;
}

impl<F> DockAnchors for F
where
    F: Fn(&str) -> Option<Rect>,
{
    fn locate(&self, window_id: &str) -> Option<Rect> {
        self(window_id)
    }
}

/// Dock without any icons; every minimize falls back to bottom-center
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDock;

impl DockAnchors for NoDock {
    fn locate(&self, _window_id: &str) -> Option<Rect> {
        None
    }
}

/// End state of the minimize animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GenieTarget {
    /// Offset from the window center to the dock anchor
    pub translate: Vec2,
    pub scale: f32,
    pub blur: f32,
}

/// Vector from the window's center to its dock icon
///
/// Without an anchor the target is the bottom-center of the viewport.
pub fn minimize_target(window: Rect, anchor: Option<Rect>, viewport: &Viewport) -> GenieTarget {
    let destination = anchor
        .map(|rect| rect.center())
        .unwrap_or_else(|| viewport.bottom_center());

    GenieTarget {
        translate: destination - window.center(),
        scale: GENIE_SCALE,
        blur: GENIE_BLUR,
    }
}
