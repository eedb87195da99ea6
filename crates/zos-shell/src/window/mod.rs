//! Window management module
//!
//! Window records, the registry that owns them, and focus/z-order.

mod record;
mod request;
mod registry;

pub use record::WindowRecord;
pub use request::OpenRequest;
pub use registry::WindowRegistry;

/// Stable window identifier, chosen by the app that opens the window
pub type WindowId = String;
