//! Shell configuration
//!
//! Every field has a default matching the stock desktop layout, so callers
//! can pass a partial JSON object from the renderer.

use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::{Result, ShellError};

/// What happens to a window record once its close animation completes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvictionPolicy {
    /// Keep the closed record so a reopen restores its last geometry
    #[default]
    Retain,
    /// Drop the record from the registry after the close animation
    AfterClose,
}

/// Layout constants and animation timings for the window manager
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    /// Height reserved for the menu bar at the top of the viewport
    pub menu_bar_height: f32,
    /// Height reserved for the dock at the bottom of the viewport
    pub dock_height: f32,
    /// Distance from an edge that arms an edge snap zone
    pub edge_threshold: f32,
    /// Side of the square corner hit-box
    pub corner_size: f32,
    /// Minimum window width after any resize
    pub min_width: f32,
    /// Minimum window height after any resize
    pub min_height: f32,
    /// Default width of a freshly opened window
    pub default_width: f32,
    /// Default height of a freshly opened window
    pub default_height: f32,
    /// X of the first window on a desktop-sized viewport
    pub base_x: f32,
    /// Y of the first window on a desktop-sized viewport
    pub base_y: f32,
    /// Offset applied per existing window when staggering new ones
    pub stagger: f32,
    /// Viewports narrower than this use the compact layout
    pub narrow_breakpoint: f32,
    pub open_duration_ms: f64,
    pub minimize_duration_ms: f64,
    pub close_duration_ms: f64,
    pub eviction: EvictionPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menu_bar_height: 28.0,
            dock_height: 80.0,
            edge_threshold: 20.0,
            corner_size: 40.0,
            min_width: 300.0,
            min_height: 200.0,
            default_width: 800.0,
            default_height: 600.0,
            base_x: 100.0,
            base_y: 50.0,
            stagger: 20.0,
            narrow_breakpoint: 768.0,
            open_duration_ms: 200.0,
            minimize_duration_ms: 500.0,
            close_duration_ms: 200.0,
            eviction: EvictionPolicy::Retain,
        }
    }
}

impl ShellConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config, falling back to the defaults when it is rejected
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "rejected shell config, using defaults");
                Self::default()
            }
        }
    }

    /// Check value ranges the geometry engine relies on
    ///
    /// The first failing field is reported by its JSON name.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.edge_threshold > 0.0, "edgeThreshold", "must be positive"),
            (self.corner_size > self.edge_threshold, "cornerSize", "must exceed edgeThreshold"),
            (self.min_width > 0.0, "minWidth", "must be positive"),
            (self.min_height > 0.0, "minHeight", "must be positive"),
            (self.default_width > 0.0, "defaultWidth", "must be positive"),
            (self.default_height > 0.0, "defaultHeight", "must be positive"),
            (self.menu_bar_height >= 0.0, "menuBarHeight", "cannot be negative"),
            (self.dock_height >= 0.0, "dockHeight", "cannot be negative"),
            (self.stagger >= 0.0, "stagger", "cannot be negative"),
            (self.open_duration_ms > 0.0, "openDurationMs", "must be positive"),
            (self.minimize_duration_ms > 0.0, "minimizeDurationMs", "must be positive"),
            (self.close_duration_ms > 0.0, "closeDurationMs", "must be positive"),
        ];
        match checks.into_iter().find(|(ok, _, _)| !ok) {
            Some((_, field, reason)) => Err(ShellError::InvalidConfig { field, reason }),
            None => Ok(()),
        }
    }
}
