//! Input result type

use serde::Serialize;
use crate::geometry::SnapZone;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A drag ended inside a snap zone
    Snapped {
        /// Window that snapped
        #[serde(rename = "windowId")]
        window_id: WindowId,
        /// Zone it snapped to
        zone: SnapZone,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Wrap a boolean outcome
    #[inline]
    pub fn from_handled(handled: bool) -> Self {
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapped_is_handled() {
        let result = InputResult::Snapped {
            window_id: "calc".to_string(),
            zone: SnapZone::Left,
        };
        assert!(result.is_handled());
        assert!(!InputResult::Unhandled.is_handled());
        assert_eq!(InputResult::from_handled(true), InputResult::Handled);
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(InputResult::Snapped {
            window_id: "calc".to_string(),
            zone: SnapZone::TopLeft,
        })
        .unwrap();
        assert_eq!(json["type"], "snapped");
        assert_eq!(json["windowId"], "calc");
        assert_eq!(json["zone"], "topLeft");
    }
}
