//! Storage result types
//!
//! Defines result structures returned by storage operations.

use serde::Serialize;
use std::path::PathBuf;

/// Result of a file write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageWriteResult {
    /// Where the bytes landed: root, folder and generated name.
    pub file_path: PathBuf,
    /// Folder and generated name, to pass back to `get` or `erase`.
    pub relative_path: PathBuf,
    pub original_filename: Option<String>,
    /// Extension of the original filename, leading dot included.
    pub extension: Option<String>,
}

/// Result of a file read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageGetResult {
    pub file_bytes: Vec<u8>,
}
