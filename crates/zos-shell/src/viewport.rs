//! Viewport with the regions reserved by the menu bar and dock

use serde::Serialize;
use crate::config::ShellConfig;
use crate::math::{Rect, Size, Vec2};

/// Visible page area plus the chrome that windows must not snap over
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Page size in logical pixels
    pub size: Size,
    pub menu_bar_height: f32,
    pub dock_height: f32,
    /// Widths below this use the compact layout
    pub narrow_breakpoint: f32,
}

impl Viewport {
    /// Create a viewport using the reserved heights from `config`
    pub fn new(width: f32, height: f32, config: &ShellConfig) -> Self {
        Self {
            size: Size::new(width, height),
            menu_bar_height: config.menu_bar_height,
            dock_height: config.dock_height,
            narrow_breakpoint: config.narrow_breakpoint,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Whether the compact (phone-sized) layout applies
    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.size.width < self.narrow_breakpoint
    }

    /// Area between the menu bar and the dock
    pub fn usable_rect(&self) -> Rect {
        let height = (self.size.height - self.menu_bar_height - self.dock_height).max(0.0);
        Rect::new(0.0, self.menu_bar_height, self.size.width, height)
    }

    /// Area below the menu bar, used by maximized windows
    pub fn maximized_rect(&self) -> Rect {
        let height = (self.size.height - self.menu_bar_height).max(0.0);
        Rect::new(0.0, self.menu_bar_height, self.size.width, height)
    }

    /// Bottom-center of the page, the genie fallback target
    #[inline]
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.size.width / 2.0, self.size.height)
    }
}
