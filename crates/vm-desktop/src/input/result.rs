//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Handled, and the host must cancel the browser default (scroll, selection)
    Consumed,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input belongs to the window's content panel
    Forward {
        /// Target window
        #[serde(rename = "windowId")]
        window_id: WindowId,
        /// X coordinate in window-local space
        #[serde(rename = "localX")]
        local_x: f32,
        /// Y coordinate in window-local space
        #[serde(rename = "localY")]
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }

    /// Check if the host must call `preventDefault`
    #[inline]
    pub fn prevents_default(&self) -> bool {
        matches!(self, InputResult::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_flags() {
        assert!(InputResult::Consumed.is_handled());
        assert!(InputResult::Consumed.prevents_default());
        assert!(!InputResult::Handled.prevents_default());
        assert!(!InputResult::Unhandled.is_handled());
    }

    #[test]
    fn test_forward_json() {
        let result = InputResult::Forward {
            window_id: "news".to_string(),
            local_x: 12.0,
            local_y: 40.0,
        };
        assert!(result.is_forward());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "forward");
        assert_eq!(json["windowId"], "news");
        assert_eq!(json["localY"], 40.0);
    }
}
