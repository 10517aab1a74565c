//! Upload input
//!
//! The bytes and metadata a collaborator hands to the storage layer.

use crate::storage::naming::file_extension;

/// One uploaded file, owned by the caller and only read by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub original_filename: Option<String>,
    /// Size reported by the collaborator, compared against policy limits.
    pub declared_size: u64,
}

impl Upload {
    /// Build an upload whose declared size is its byte length.
    pub fn new(bytes: impl Into<Vec<u8>>, original_filename: Option<&str>) -> Self {
        let bytes = bytes.into();
        let declared_size = bytes.len() as u64;
        Self {
            bytes,
            original_filename: original_filename.map(str::to_string),
            declared_size,
        }
    }

    pub fn with_declared_size(mut self, declared_size: u64) -> Self {
        self.declared_size = declared_size;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Extension of the original filename, leading dot included.
    pub fn extension(&self) -> Option<String> {
        file_extension(self.original_filename.as_deref())
    }
}
