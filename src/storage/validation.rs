//! Upload validation
//!
//! Checks an upload against a policy, collecting every failure instead of
//! stopping at the first one.

use crate::outcome::Outcome;
use crate::storage::policy::UploadPolicy;
use crate::storage::upload::Upload;

pub const EMPTY_FILE_MESSAGE: &str = "File is empty";
pub const EXTENSION_REJECTED_MESSAGE: &str = "File extension is not accepted";

/// Run the empty, extension and size checks, in that order.
pub fn validate_upload(upload: &Upload, policy: &UploadPolicy) -> Outcome<()> {
    let mut errors = Vec::new();

    if upload.is_empty() {
        errors.push(EMPTY_FILE_MESSAGE.to_string());
    }

    if !policy.permits_extension(upload.extension().as_deref()) {
        errors.push(EXTENSION_REJECTED_MESSAGE.to_string());
    }

    if upload.declared_size > policy.max_size_bytes {
        errors.push(format!(
            "File is too big : {} > {}",
            upload.declared_size, policy.max_size_bytes
        ));
    }

    Outcome::from_errors(errors, ())
}

/// A folder segment must be a single plain path component.
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains('/')
        && !segment.contains('\\')
        && !segment.contains('\0')
}
