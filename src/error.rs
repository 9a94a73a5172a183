//! Error types for circle-bounce.
//!
//! Only setup can fail: parsing colors and configs, and acquiring a drawing
//! context. The frame loop itself is infallible.

use std::fmt;

/// Errors that can occur while setting up a scene.
#[derive(Debug)]
pub enum Error {
    /// A color string was not `#rgb` or `#rrggbb`.
    InvalidColor(String),
    /// A config value is out of range.
    InvalidConfig(String),
    /// Config JSON could not be parsed.
    Json(serde_json::Error),
    /// The canvas or its 2D context could not be obtained.
    Canvas(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColor(s) => write!(f, "Invalid color '{}': expected #rgb or #rrggbb", s),
            Error::InvalidConfig(msg) => write!(f, "Invalid scene config: {}", msg),
            Error::Json(e) => write!(f, "Failed to parse scene config: {}", e),
            Error::Canvas(msg) => write!(f, "Canvas unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

/// Result alias for fallible setup operations.
pub type Result<T> = std::result::Result<T, Error>;
