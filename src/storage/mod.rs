//! File system storage management
//!
//! Upload policies, validation, naming and the storage engine itself.

pub mod filesystem;
pub mod naming;
pub mod operations;
pub mod policy;
pub mod results;
pub mod upload;
pub mod validation;

pub use operations::StorageEngine;
pub use policy::{PolicyRegistry, USER_POLICY, UploadPolicy};
pub use results::{StorageGetResult, StorageWriteResult};
pub use upload::Upload;
