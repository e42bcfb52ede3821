//! Artifact storage backends.
//!
//! Keys are slash-separated paths produced by [`crate::types::JobInfo`];
//! each backend treats them as opaque.

use crate::error::{ResultsError, ResultsResult};
use std::path::PathBuf;
use tracing::debug;

/// Backend-agnostic blob storage for job artifacts.
#[allow(async_fn_in_trait)]
pub trait ResultsStorage {
    async fn put(&self, key: &str, data: Vec<u8>) -> ResultsResult<()>;
    async fn get(&self, key: &str) -> ResultsResult<Vec<u8>>;
    async fn exists(&self, key: &str) -> ResultsResult<bool>;
}

/// Filesystem storage rooted at a directory, used in development and tests.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl ResultsStorage for FsStorage {
    async fn put(&self, key: &str, data: Vec<u8>) -> ResultsResult<()> {
        let path = self.full_path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ResultsError::Storage(format!("create dir {}: {e}", parent.display()))
            })?;
        }
        let size = data.len();
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| ResultsError::Storage(format!("write failed for {key}: {e}")))?;
        debug!(%key, size, "stored artifact");
        Ok(())
    }

    async fn get(&self, key: &str) -> ResultsResult<Vec<u8>> {
        tokio::fs::read(self.full_path(key))
            .await
            .map_err(|e| ResultsError::Storage(format!("fetch failed for {key}: {e}")))
    }

    async fn exists(&self, key: &str) -> ResultsResult<bool> {
        Ok(tokio::fs::try_exists(self.full_path(key))
            .await
            .unwrap_or(false))
    }
}
