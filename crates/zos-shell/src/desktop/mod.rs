//! Virtual desktop module
//!
//! Windows belong to exactly one desktop; only the active desktop renders.

#[allow(clippy::module_inception)]
mod desktop;
mod list;

pub use desktop::Desktop;
pub use list::DesktopList;

/// Unique desktop identifier
pub type DesktopId = u32;
