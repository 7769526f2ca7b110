//! Error types for saving and loading.

use std::fmt;
use std::io;

use lifegrid_arena::ArenaError;

/// Errors that can occur while writing, listing, or reading saves.
#[derive(Debug)]
pub enum SaveError {
    /// An I/O error from the underlying store.
    Io(io::Error),
    /// The document is not valid JSON or does not match the save layout.
    Json(serde_json::Error),
    /// The document decoded but does not describe a valid arena.
    Model(ArenaError),
    /// No save with this name exists in the store.
    NotFound {
        /// The requested save name.
        name: String,
    },
    /// The save name is empty or would escape the store's directory.
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "malformed save document: {e}"),
            Self::Model(e) => write!(f, "invalid saved arena: {e}"),
            Self::NotFound { name } => write!(f, "save '{name}' not found"),
            Self::InvalidName { name } => write!(f, "invalid save name '{name}'"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ArenaError> for SaveError {
    fn from(e: ArenaError) -> Self {
        Self::Model(e)
    }
}
