//! filegate
//!
//! Stores uploaded files under a configured root with generated,
//! time-sortable names, after checking them against an upload policy.
//! Every operation reports through an [`Outcome`] instead of panicking.

pub mod config;
pub mod error;
pub mod outcome;
pub mod service;
pub mod storage;
pub mod utils;

pub use config::StorageConfig;
pub use error::StorageError;
pub use outcome::Outcome;
pub use service::StorageService;
pub use storage::{
    PolicyRegistry, StorageEngine, StorageGetResult, StorageWriteResult, Upload, UploadPolicy,
};
