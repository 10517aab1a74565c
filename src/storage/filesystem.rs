//! File system operations
//!
//! Thin wrappers over `std::fs` returning [`StorageError`].

use std::fs;
use std::path::Path;

use crate::error::StorageError;

/// Create a directory and its parents
pub fn create_directory(path: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Check if anything exists at the path
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Write all bytes, creating or truncating the file. Parent directories
/// must already exist.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    fs::write(path, bytes)?;
    Ok(())
}

/// Read all bytes of an existing file
pub fn read_file(path: &Path) -> Result<Vec<u8>, StorageError> {
    if !path_exists(path) {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

/// Delete an existing file, or an existing empty directory
pub fn remove_file(path: &Path) -> Result<(), StorageError> {
    if !path_exists(path) {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        fs::remove_dir(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
