//! Study-job results orchestration.
//!
//! Coordinates the encrypted results workflow around `si-archive`:
//! - packaging a job's outputs for an org's enrolled reviewers,
//! - storing archives in S3 or on the local filesystem,
//! - pushing job code with manifest-last ordering (the manifest's presence
//!   signals upload-complete to downstream processing),
//! - decrypting fetched archives with a reviewer's pasted PEM key.
//!
//! Job identity is passed explicitly through every call; there is no
//! ambient request context.

pub mod code_upload;
pub mod config;
pub mod error;
pub mod packager;
pub mod recipients;
pub mod review;
pub mod s3_storage;
pub mod storage;
pub mod types;

pub use config::ResultsConfig;
pub use error::{ResultsError, ResultsResult};
pub use packager::{
    package_files, packaging_failure_archive, JobProgress, ResultsPackager,
    ENCRYPTED_LOGS_FILENAME, ENCRYPTED_RESULTS_FILENAME, PACKAGING_FAILURE_FILENAME,
    PACKAGING_FAILURE_MESSAGE,
};
pub use recipients::RecipientRegistry;
pub use review::decrypt_job_files;
pub use s3_storage::S3Storage;
pub use storage::{FsStorage, ResultsStorage};
pub use types::{EncryptedJobFile, FileKind, JobFileInfo, JobInfo, RecipientKey};
