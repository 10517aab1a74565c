//! Error handling
//!
//! Defines the storage error type and how failures get reported.

pub mod handlers;
pub mod types;

pub use types::*;
