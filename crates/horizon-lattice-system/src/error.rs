//! Error types for theme loading and configuration.
//!
//! Style resolution itself never fails; these errors only surface while a
//! theme or a breakpoint set is being built.

use std::path::PathBuf;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Theme JSON could not be deserialized.
    #[error("Failed to parse theme: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Breakpoint set is empty, has duplicate names, or is out of order.
    #[error("Invalid breakpoints: {message}")]
    InvalidBreakpoints { message: String },

    /// A theme section holds a value of the wrong shape.
    #[error("Invalid value for theme key '{key}': {message}")]
    InvalidThemeValue { key: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a breakpoint error.
    pub fn invalid_breakpoints(message: impl Into<String>) -> Self {
        Self::InvalidBreakpoints {
            message: message.into(),
        }
    }

    /// Create a theme value error.
    pub fn invalid_theme_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidThemeValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
