//! Error types for the window manager
//!
//! Window operations themselves are total; these errors only surface at the
//! boundary where strings and JSON from the host are parsed, and from the
//! `try_*` lookup helpers.

/// Errors that can occur while talking to the window manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// No window with the given id is configured
    UnknownWindow(String),

    /// A resize handle code that is not one of the eight directions
    InvalidResizeDirection(String),

    /// A hit-region name the host sent that does not map to a region
    InvalidRegion(String),

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    Serialization(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWindow(id) => write!(f, "unknown window: {}", id),
            Self::InvalidResizeDirection(code) => {
                write!(f, "invalid resize direction: {:?}", code)
            }
            Self::InvalidRegion(name) => write!(f, "invalid window region: {:?}", name),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
