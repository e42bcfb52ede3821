//! Shared job and file types.

use serde::{Deserialize, Serialize};

/// Identifies where one job's artifacts live in storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobInfo {
    pub org_slug: String,
    pub study_id: String,
    pub job_id: String,
}

impl JobInfo {
    /// Storage prefix for this job's artifacts.
    pub fn prefix(&self) -> String {
        format!(
            "{}/studies/{}/jobs/{}",
            self.org_slug, self.study_id, self.job_id
        )
    }

    pub fn code_path(&self, file_name: &str) -> String {
        format!("{}/code/{file_name}", self.prefix())
    }

    pub fn results_path(&self, file_name: &str) -> String {
        format!("{}/results/{file_name}", self.prefix())
    }
}

/// A reviewer's public key plus fingerprint, as enrolled for an org.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecipientKey {
    /// Raw X25519 public key bytes.
    pub public_key: Vec<u8>,
    pub fingerprint: String,
}

/// Kinds of files attached to a study job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum FileKind {
    ApprovedLog,
    ApprovedResult,
    EncryptedLog,
    EncryptedResult,
    MainCode,
    SupplementalCode,
}

impl FileKind {
    /// Kind a file takes on once a reviewer approves its decrypted form.
    pub fn approved(self) -> FileKind {
        match self {
            FileKind::EncryptedLog => FileKind::ApprovedLog,
            FileKind::EncryptedResult => FileKind::ApprovedResult,
            other => other,
        }
    }
}

/// An encrypted archive fetched from storage, awaiting reviewer decryption.
#[derive(Clone, Debug)]
pub struct EncryptedJobFile {
    pub bytes: Vec<u8>,
    /// Identifier of the job file row this archive came from.
    pub source_id: String,
    pub kind: FileKind,
}

/// A decrypted file held in memory for reviewer display and approval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobFileInfo {
    pub path: String,
    pub contents: Vec<u8>,
    pub kind: FileKind,
    pub source_id: String,
}
