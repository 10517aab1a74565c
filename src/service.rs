//! Async storage service
//!
//! Wraps a shared [`StorageEngine`] for tokio callers. The engine stays
//! blocking; each call runs on tokio's blocking pool.

use log::error;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task;

use crate::outcome::Outcome;
use crate::storage::{StorageEngine, StorageGetResult, StorageWriteResult, Upload, UploadPolicy};

#[derive(Debug, Clone)]
pub struct StorageService {
    engine: Arc<StorageEngine>,
}

impl StorageService {
    pub fn new(engine: StorageEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub async fn write(
        &self,
        upload: Upload,
        relative_folder: PathBuf,
    ) -> Outcome<StorageWriteResult> {
        self.run(move |engine| engine.write(&upload, &relative_folder))
            .await
    }

    pub async fn write_with_policy(
        &self,
        upload: Upload,
        policy: UploadPolicy,
    ) -> Outcome<StorageWriteResult> {
        self.run(move |engine| engine.write_with_policy(&upload, &policy))
            .await
    }

    pub async fn erase(&self, relative_path: PathBuf) -> Outcome<()> {
        self.run(move |engine| engine.erase(&relative_path)).await
    }

    pub async fn get(&self, relative_path: PathBuf) -> Outcome<StorageGetResult> {
        self.run(move |engine| engine.get(&relative_path)).await
    }

    /// Run a blocking engine call; a task that panicked or was cancelled
    /// becomes a failure.
    async fn run<T, F>(&self, operation: F) -> Outcome<T>
    where
        T: Send + 'static,
        F: FnOnce(&StorageEngine) -> Outcome<T> + Send + 'static,
    {
        let engine = Arc::clone(&self.engine);
        match task::spawn_blocking(move || operation(&*engine)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Storage task failed: {}", e);
                Outcome::failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FILE_NOT_FOUND_MESSAGE;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn service_with_user_folder() -> (TempDir, StorageService) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("User")).unwrap();
        let service = StorageService::new(StorageEngine::new(dir.path()));
        (dir, service)
    }

    #[tokio::test]
    async fn test_policy_write_get_erase() {
        let (_dir, service) = service_with_user_folder();
        let upload = Upload::new(b"id,name\n1,ada\n".to_vec(), Some("people.csv"));

        let written = service
            .write_with_policy(upload.clone(), UploadPolicy::user())
            .await
            .into_data()
            .unwrap();

        let read = service.get(written.relative_path.clone()).await;
        assert_eq!(read.into_data().unwrap().file_bytes, upload.bytes);

        assert!(service.erase(written.relative_path.clone()).await.is_success());
        assert_eq!(
            service.get(written.relative_path).await.errors(),
            [FILE_NOT_FOUND_MESSAGE]
        );
    }

    #[tokio::test]
    async fn test_concurrent_writes_get_distinct_names() {
        let (_dir, service) = service_with_user_folder();

        let mut handles = Vec::new();
        for _ in 0..32 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                let upload = Upload::new(vec![7u8; 16], Some("same.csv"));
                service.write(upload, PathBuf::from("User")).await
            }));
        }

        let mut names = HashSet::new();
        for handle in handles {
            let written = handle.await.unwrap().into_data().unwrap();
            names.insert(written.relative_path);
        }
        assert_eq!(names.len(), 32);
    }
}
