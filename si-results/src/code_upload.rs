//! Job code upload with manifest-last ordering.
//!
//! The manifest's presence in storage signals that the upload is complete
//! and downstream processing may start, so it is written only after every
//! code file it lists has been stored.

use crate::error::ResultsResult;
use crate::storage::ResultsStorage;
use crate::types::JobInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

pub const CODE_MANIFEST_FILENAME: &str = "manifest.json";

/// Listing of a job's uploaded code files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CodeManifest {
    pub job_id: String,
    /// Language tag for the runner, e.g. `"r"`.
    pub language: String,
    /// File name to size in bytes.
    pub files: BTreeMap<String, u64>,
}

impl CodeManifest {
    pub fn new(job_id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            language: language.into(),
            files: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, name: &str, size: u64) {
        self.files.insert(name.to_string(), size);
    }
}

/// Uploads `files` under the job's code prefix, then the manifest
/// strictly last. Any file failure aborts before the manifest is written,
/// so downstream never observes a half-uploaded job as complete.
pub async fn push_job_code<S: ResultsStorage>(
    storage: &S,
    job: &JobInfo,
    language: &str,
    files: &[(String, Vec<u8>)],
) -> ResultsResult<CodeManifest> {
    let mut manifest = CodeManifest::new(job.job_id.clone(), language);

    for (name, contents) in files {
        manifest.record(name, contents.len() as u64);
        storage.put(&job.code_path(name), contents.clone()).await?;
    }

    // Completion signal; nothing may be written after this.
    let body = serde_json::to_vec(&manifest)?;
    storage
        .put(&job.code_path(CODE_MANIFEST_FILENAME), body)
        .await?;

    info!(job_id = %job.job_id, files = files.len(), "job code upload complete");
    Ok(manifest)
}

/// Fetches and parses a previously uploaded code manifest.
pub async fn fetch_code_manifest<S: ResultsStorage>(
    storage: &S,
    job: &JobInfo,
) -> ResultsResult<CodeManifest> {
    let body = storage.get(&job.code_path(CODE_MANIFEST_FILENAME)).await?;
    Ok(serde_json::from_slice(&body)?)
}
