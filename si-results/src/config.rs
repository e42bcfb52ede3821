//! Results storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for where job artifacts are stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// S3 bucket for study artifacts.
    pub s3_bucket: String,

    /// AWS region for S3.
    pub s3_region: String,

    /// Optional S3 endpoint override (MinIO in testing).
    pub s3_endpoint_override: Option<String>,

    /// When set, artifacts are written under this directory instead of S3.
    pub local_storage_dir: Option<PathBuf>,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            s3_bucket: "si-study-artifacts".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_endpoint_override: None,
            local_storage_dir: None,
        }
    }
}

impl ResultsConfig {
    pub fn uses_s3(&self) -> bool {
        self.local_storage_dir.is_none()
    }
}
