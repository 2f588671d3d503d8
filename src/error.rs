//! Error types
//!
//! The conversion pipeline itself is total and has no error type; only the
//! keyboard layout configuration can fail to load.

use std::fmt;

/// Error returned when loading a keyboard layout file.
///
/// A failed load is not fatal to a keyboard emulation layer: it degrades to
/// default (unmapped) input handling.
#[derive(Debug)]
pub enum LayoutError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for LayoutError {
    fn from(error: std::io::Error) -> Self {
        LayoutError::Io(error)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(error: serde_json::Error) -> Self {
        LayoutError::Parse(error)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Io(err) => write!(f, "layout read: {}", err),
            LayoutError::Parse(err) => write!(f, "layout parse: {}", err),
        }
    }
}

impl std::error::Error for LayoutError {}
