//! Input routing module
//!
//! Pointer-capture sessions for window drag/resize and the per-window snap
//! memory. The engine's input handlers drive these against the registry.

mod router;
mod session;
mod snap_state;
mod result;

pub use router::InputRouter;
pub use session::PointerSession;
pub use snap_state::{PreSnap, SnapState};
pub use result::InputResult;
