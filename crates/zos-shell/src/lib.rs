//! Window manager core for the Zero OS browser shell
//!
//! This crate owns all window state behind the desktop shell's renderer:
//! - Window registry (open, close, minimize, maximize, focus, z-order)
//! - Geometry engine (snap zones, snap rectangles, capped resize)
//! - Drag/resize controller (one pointer session at a time)
//! - Lifecycle animator (open, genie minimize, and close animations)
//! - Desktops (which windows are shown)
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Window records and the registry
//! - [`geometry`]: Pure snap and resize functions
//! - [`input`]: Pointer sessions and snap memory
//! - [`transition`]: Easing, animations, lifecycle phases, and timers
//! - [`desktop`]: Desktop list
//!
//! ## Example
//!
//! ```rust
//! use zos_shell::{OpenRequest, ShellConfig, ShellEngine, Vec2};
//!
//! let mut engine = ShellEngine::new(ShellConfig::default(), 1600.0, 900.0);
//! engine.open(OpenRequest::new("notes", "Notes", "Notes"), 0.0);
//!
//! engine.begin_drag("notes", Vec2::new(150.0, 60.0));
//! engine.drag_move(Vec2::new(5.0, 400.0));
//! engine.end_drag();
//!
//! let snapshot = engine.snapshot(0.0);
//! assert_eq!(snapshot.windows.len(), 1);
//! ```
//!
//! ## Time
//!
//! Nothing reads a clock. Every time-dependent call takes `now_ms`, and
//! deferred registry changes are applied by [`ShellEngine::tick`].

pub mod math;
pub mod window;
pub mod geometry;
pub mod input;
pub mod transition;
pub mod desktop;

mod config;
mod engine;
mod error;
mod viewport;

pub use config::{EvictionPolicy, ShellConfig};
pub use engine::{Command, RenderSnapshot, ShellEngine, WindowView};
pub use error::{Result, ShellError};
pub use input::InputResult;
pub use math::{Rect, Size, Vec2};
pub use viewport::Viewport;
pub use window::{OpenRequest, WindowId, WindowRecord};

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;
