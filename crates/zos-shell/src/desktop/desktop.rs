//! Desktop (workspace) record

use serde::{Deserialize, Serialize};
use super::DesktopId;

/// A virtual desktop shown in the mission-control strip
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desktop {
    pub id: DesktopId,
    pub name: String,
}

impl Desktop {
    pub fn new(id: DesktopId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
