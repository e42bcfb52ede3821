//! Packages job results and logs into encrypted archives and stores them.

use crate::error::ResultsResult;
use crate::storage::ResultsStorage;
use crate::types::{JobInfo, RecipientKey};
use si_archive::{Recipient, ResultsWriter};
use tracing::{info, warn};

pub const ENCRYPTED_RESULTS_FILENAME: &str = "encrypted-results.zip";
pub const ENCRYPTED_LOGS_FILENAME: &str = "encrypted-logs.zip";

pub const PACKAGING_FAILURE_FILENAME: &str = "error-log.txt";
pub const PACKAGING_FAILURE_MESSAGE: &str = "Job failed during code packaging";

fn to_archive_recipients(recipients: &[RecipientKey]) -> Vec<Recipient> {
    recipients
        .iter()
        .map(|key| Recipient {
            public_key: key.public_key.clone(),
            fingerprint: key.fingerprint.clone(),
        })
        .collect()
}

/// Encrypts `files` for `recipients` and returns the archive bytes.
pub fn package_files(
    recipients: &[RecipientKey],
    files: &[(String, Vec<u8>)],
) -> ResultsResult<Vec<u8>> {
    let mut writer = ResultsWriter::new(&to_archive_recipients(recipients))?;
    for (name, contents) in files {
        writer.add_file(name, contents)?;
    }
    Ok(writer.generate()?)
}

/// One-file archive holding the packaging-failure log message, so
/// reviewers see build errors through the same decrypt flow as results.
pub fn packaging_failure_archive(recipients: &[RecipientKey]) -> ResultsResult<Vec<u8>> {
    package_files(
        recipients,
        &[(
            PACKAGING_FAILURE_FILENAME.to_string(),
            PACKAGING_FAILURE_MESSAGE.as_bytes().to_vec(),
        )],
    )
}

/// Facts about a job's progress, read from the caller's own bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct JobProgress {
    /// The job reached READY, meaning real results exist or will exist.
    pub reached_ready: bool,
    /// An encrypted log archive was already stored for this job.
    pub has_encrypted_log: bool,
}

/// Packages a job's outputs and stores the archives.
pub struct ResultsPackager<S> {
    storage: S,
}

impl<S: ResultsStorage> ResultsPackager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Packages and stores a job's result files; returns the storage key.
    ///
    /// Any failure aborts the step before a partial archive is written.
    pub async fn store_results(
        &self,
        job: &JobInfo,
        recipients: &[RecipientKey],
        files: &[(String, Vec<u8>)],
    ) -> ResultsResult<String> {
        let archive = package_files(recipients, files)?;
        let key = job.results_path(ENCRYPTED_RESULTS_FILENAME);
        self.storage.put(&key, archive).await?;
        info!(job_id = %job.job_id, %key, "stored encrypted results archive");
        Ok(key)
    }

    /// Stores an encrypted packaging-failure log for a job that errored
    /// before producing results.
    ///
    /// Returns `false` without storing anything when the job already
    /// reached READY, already has an encrypted log, or the org has no
    /// enrolled recipient keys.
    pub async fn store_build_error_log(
        &self,
        job: &JobInfo,
        progress: JobProgress,
        recipients: &[RecipientKey],
    ) -> ResultsResult<bool> {
        if progress.reached_ready || progress.has_encrypted_log {
            return Ok(false);
        }
        if recipients.is_empty() {
            warn!(
                job_id = %job.job_id,
                org = %job.org_slug,
                "no recipient keys enrolled, cannot store encrypted packaging error log"
            );
            return Ok(false);
        }

        let archive = packaging_failure_archive(recipients)?;
        let key = job.results_path(ENCRYPTED_LOGS_FILENAME);
        self.storage.put(&key, archive).await?;
        info!(job_id = %job.job_id, %key, "stored encrypted packaging failure log");
        Ok(true)
    }

    pub async fn fetch_encrypted_results(&self, job: &JobInfo) -> ResultsResult<Vec<u8>> {
        self.storage
            .get(&job.results_path(ENCRYPTED_RESULTS_FILENAME))
            .await
    }

    pub async fn fetch_encrypted_log(&self, job: &JobInfo) -> ResultsResult<Vec<u8>> {
        self.storage
            .get(&job.results_path(ENCRYPTED_LOGS_FILENAME))
            .await
    }
}
