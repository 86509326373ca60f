use std::fmt;

use crate::TabIdentifier;

/// Result type for groupmodel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing groups
#[derive(Debug)]
pub enum Error {
    /// Unknown-control item was handed over without a view reference
    MissingViewReference(TabIdentifier),

    /// Search-and-list configuration name did not resolve in the store
    UnresolvedConfiguration(String),

    /// Engine configuration could not be read or written
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingViewReference(id) => {
                write!(f, "Missing view reference for group '{}'", id)
            }
            Error::UnresolvedConfiguration(name) => {
                write!(f, "Unresolved search and list configuration: {}", name)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::MissingViewReference(_)
            | Error::UnresolvedConfiguration(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
