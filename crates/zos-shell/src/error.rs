//! Error types for the shell core
//!
//! Window operations never fail (unknown ids are no-ops), so errors only
//! come from the surfaces that parse external input.

/// Errors raised while loading configuration or decoding bridge input.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// JSON input could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    /// A resize direction string contained no compass letters or unknown ones.
    #[error("invalid resize direction: {0:?}")]
    InvalidDirection(String),
}

/// Result alias for fallible shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
