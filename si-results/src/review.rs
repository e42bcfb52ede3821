//! Reviewer-side decryption of fetched archives.

use crate::error::{ResultsError, ResultsResult};
use crate::types::{EncryptedJobFile, JobFileInfo};
use si_archive::ResultsReader;
use si_crypto::ReviewerKeyPair;
use tracing::debug;

/// Decrypts every fetched archive with the reviewer-supplied PEM key.
///
/// Key-parse failures and decrypt failures are distinct error classes so
/// the caller can render "check the key was copied" versus "key is not
/// valid for these results"; neither reveals which recipient entry or
/// which integrity check failed. Single attempt per call — the caller
/// owns any re-entry loop.
pub fn decrypt_job_files(
    encrypted_files: &[EncryptedJobFile],
    private_key_pem: &str,
) -> ResultsResult<Vec<JobFileInfo>> {
    let keypair =
        ReviewerKeyPair::from_private_key_pem(private_key_pem).map_err(ResultsError::KeyParse)?;
    let fingerprint = keypair.fingerprint();

    let mut decrypted = Vec::new();
    for file in encrypted_files {
        let mut reader = ResultsReader::new(file.bytes.clone(), &keypair.secret, &fingerprint)
            .map_err(|_| ResultsError::InvalidKey)?;
        let extracted = reader
            .extract_files()
            .map_err(|_| ResultsError::InvalidKey)?;

        for entry in extracted {
            decrypted.push(JobFileInfo {
                path: entry.path,
                contents: entry.contents,
                kind: file.kind.approved(),
                source_id: file.source_id.clone(),
            });
        }
    }

    debug!(files = decrypted.len(), "decrypted job files for review");
    Ok(decrypted)
}
