//! Open request sent by apps, the dock or the menu bar

use serde::Deserialize;

/// Request to open (or reactivate) a window
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRequest {
    /// Window id; reopening an existing id reactivates that record
    pub id: String,
    /// Title shown in the window chrome
    pub title: String,
    /// Key of the app view the renderer mounts in the content area
    pub component_key: String,
}

impl OpenRequest {
    pub fn new(id: impl Into<String>, title: impl Into<String>, component_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            component_key: component_key.into(),
        }
    }
}
