//! Error types
//!
//! Internal error type of the storage layer. Its `Display` text is exactly
//! the message handed to callers inside a failed [`Outcome`](crate::Outcome).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Message reported when `get` or `erase` target a missing path.
pub const FILE_NOT_FOUND_MESSAGE: &str = "File does not exists.";

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    /// Nothing exists at the resolved path.
    NotFound(PathBuf),
    /// The filesystem refused a read, write or delete.
    Io(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(_) => write!(f, "{}", FILE_NOT_FOUND_MESSAGE),
            StorageError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::NotFound(_) => None,
            StorageError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}
