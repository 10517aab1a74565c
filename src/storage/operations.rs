//! Storage operations
//!
//! The [`StorageEngine`] is the only component touching the filesystem.
//! Every path it handles is resolved against one root fixed at
//! construction, and every operation reports through an [`Outcome`].

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::config::StorageConfig;
use crate::error::handlers::report;
use crate::outcome::Outcome;
use crate::storage::filesystem::{read_file, remove_file, write_file};
use crate::storage::naming::unique_filename;
use crate::storage::policy::UploadPolicy;
use crate::storage::results::{StorageGetResult, StorageWriteResult};
use crate::storage::upload::Upload;

/// Blocking file store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct StorageEngine {
    root: PathBuf,
}

impl StorageEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.storage_root_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store the upload under `relative_folder` with a generated name.
    ///
    /// No validation happens here and the folder must already exist.
    pub fn write(&self, upload: &Upload, relative_folder: &Path) -> Outcome<StorageWriteResult> {
        let relative_path = relative_folder.join(unique_filename());
        let file_path = self.root.join(&relative_path);

        if let Err(e) = write_file(&file_path, &upload.bytes) {
            report("write", &e);
            return e.into();
        }

        info!(
            "Stored {} bytes at {} (original: {:?})",
            upload.bytes.len(),
            file_path.display(),
            upload.original_filename
        );

        Outcome::success(StorageWriteResult {
            file_path,
            relative_path,
            original_filename: upload.original_filename.clone(),
            extension: upload.extension(),
        })
    }

    /// Validate the upload against `policy`, then store it in the policy's folder.
    pub fn write_with_policy(
        &self,
        upload: &Upload,
        policy: &UploadPolicy,
    ) -> Outcome<StorageWriteResult> {
        let validation = policy.validate(upload);
        if !validation.is_success() {
            warn!(
                "Upload {:?} rejected by policy '{}': {}",
                upload.original_filename,
                policy.name,
                validation.errors().join("; ")
            );
            return Outcome::clone_failure_from(&validation);
        }

        self.write(upload, &policy.relative_path())
    }

    /// Delete the file at `relative_path`.
    pub fn erase(&self, relative_path: impl AsRef<Path>) -> Outcome<()> {
        let file_path = self.root.join(relative_path);

        match remove_file(&file_path) {
            Ok(()) => {
                info!("Deleted {}", file_path.display());
                Outcome::done()
            }
            Err(e) => {
                report("erase", &e);
                e.into()
            }
        }
    }

    /// Read the whole file at `relative_path`.
    pub fn get(&self, relative_path: impl AsRef<Path>) -> Outcome<StorageGetResult> {
        let file_path = self.root.join(relative_path);

        match read_file(&file_path) {
            Ok(file_bytes) => {
                debug!("Read {} bytes from {}", file_bytes.len(), file_path.display());
                Outcome::success(StorageGetResult { file_bytes })
            }
            Err(e) => {
                report("get", &e);
                e.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FILE_NOT_FOUND_MESSAGE;
    use std::fs;
    use tempfile::TempDir;

    fn engine_with_user_folder() -> (TempDir, StorageEngine) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("User")).unwrap();
        let engine = StorageEngine::new(dir.path());
        (dir, engine)
    }

    #[test]
    fn test_write_then_get() {
        let (_dir, engine) = engine_with_user_folder();
        let upload = Upload::new(b"a,b\n1,2\n".to_vec(), Some("data.csv"));

        let written = engine.write(&upload, Path::new("User")).into_data().unwrap();
        assert!(written.file_path.starts_with(engine.root().join("User")));
        assert_eq!(written.relative_path.parent(), Some(Path::new("User")));
        assert_eq!(written.extension.as_deref(), Some(".csv"));
        assert_eq!(written.original_filename.as_deref(), Some("data.csv"));

        let read = engine.get(&written.relative_path).into_data().unwrap();
        assert_eq!(read.file_bytes, upload.bytes);
    }

    #[test]
    fn test_write_keeps_no_extension_on_disk() {
        let (_dir, engine) = engine_with_user_folder();
        let upload = Upload::new(vec![1u8], Some("data.csv"));

        let written = engine.write(&upload, Path::new("User")).into_data().unwrap();
        let stored_name = written.file_path.file_name().unwrap().to_string_lossy().to_string();
        assert!(!stored_name.ends_with(".csv"));
    }

    #[test]
    fn test_write_without_filename() {
        let (_dir, engine) = engine_with_user_folder();
        let upload = Upload::new(vec![1u8], None);

        let written = engine.write(&upload, Path::new("User")).into_data().unwrap();
        assert_eq!(written.original_filename, None);
        assert_eq!(written.extension, None);
    }

    #[test]
    fn test_write_into_missing_folder_fails() {
        let (_dir, engine) = engine_with_user_folder();
        let upload = Upload::new(vec![1u8], Some("data.csv"));

        let outcome = engine.write(&upload, Path::new("Missing"));
        let expected = fs::write(engine.root().join("Missing").join("x"), b"x")
            .unwrap_err()
            .to_string();
        assert!(!outcome.is_success());
        assert_eq!(outcome.errors(), [expected]);
        assert!(!engine.root().join("Missing").exists());
    }

    #[test]
    fn test_write_with_policy_rejection_touches_nothing() {
        let (dir, engine) = engine_with_user_folder();
        let upload = Upload::new(Vec::new(), Some("data.txt"));

        let outcome = engine.write_with_policy(&upload, &UploadPolicy::user());
        assert_eq!(
            outcome.errors(),
            ["File is empty", "File extension is not accepted"]
        );
        assert_eq!(fs::read_dir(dir.path().join("User")).unwrap().count(), 0);
    }

    #[test]
    fn test_erase() {
        let (_dir, engine) = engine_with_user_folder();
        let upload = Upload::new(vec![1u8, 2], Some("data.csv"));
        let written = engine.write(&upload, Path::new("User")).into_data().unwrap();

        assert_eq!(engine.erase(&written.relative_path), Outcome::done());
        assert!(!written.file_path.exists());
        assert_eq!(
            engine.erase(&written.relative_path).errors(),
            [FILE_NOT_FOUND_MESSAGE]
        );
    }

    #[test]
    fn test_erase_empty_directory() {
        let (dir, engine) = engine_with_user_folder();
        fs::create_dir(dir.path().join("User").join("empty")).unwrap();

        assert_eq!(engine.erase("User/empty"), Outcome::done());
        assert!(!dir.path().join("User").join("empty").exists());
    }

    #[test]
    fn test_erase_non_empty_directory_is_io_failure() {
        let (dir, engine) = engine_with_user_folder();
        fs::write(dir.path().join("User").join("kept"), b"x").unwrap();

        let outcome = engine.erase("User");
        assert!(!outcome.is_success());
        assert_eq!(outcome.errors().len(), 1);
        assert_ne!(outcome.errors(), [FILE_NOT_FOUND_MESSAGE]);
        assert!(dir.path().join("User").join("kept").exists());
    }

    #[test]
    fn test_get_missing() {
        let (_dir, engine) = engine_with_user_folder();
        let outcome = engine.get("User/never-written");
        assert_eq!(outcome.errors(), [FILE_NOT_FOUND_MESSAGE]);
        assert_eq!(outcome.data(), None);
    }

    #[test]
    fn test_get_directory_is_io_failure() {
        let (_dir, engine) = engine_with_user_folder();
        let outcome = engine.get("User");
        assert!(!outcome.is_success());
        assert_ne!(outcome.errors(), [FILE_NOT_FOUND_MESSAGE]);
    }
}
