//! Stored file naming
//!
//! Generated names sort by creation time and stay unique through a random
//! uuid suffix: `2024-03-05T07:08:09.042Z-<uuid>`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Millisecond timestamp; the trailing `Z` is appended as a literal.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Generate a fresh name for a stored file.
pub fn unique_filename() -> String {
    unique_filename_at(Utc::now())
}

pub fn unique_filename_at(now: DateTime<Utc>) -> String {
    format!("{}Z-{}", now.format(TIMESTAMP_FORMAT), Uuid::new_v4())
}

/// Everything from the last `.` of the filename, dot included.
///
/// Absent when there is no filename or it contains no dot.
pub fn file_extension(filename: Option<&str>) -> Option<String> {
    let filename = filename?;
    filename.rfind('.').map(|index| filename[index..].to_string())
}
