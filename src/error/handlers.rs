//! Error handlers
//!
//! Logs storage failures before they are turned into outcomes.

use log::{error, warn};

use crate::error::types::StorageError;

/// Log a failed storage operation at a level matching its cause.
pub fn report(operation: &str, err: &StorageError) {
    match err {
        StorageError::NotFound(path) => {
            warn!("{} failed: nothing at {}", operation, path.display())
        }
        StorageError::Io(e) => error!("{} failed: {}", operation, e),
    }
}
