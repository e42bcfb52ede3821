//! Archive manifest: sealed keys per recipient plus the entry listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use si_crypto::SealedKey;

/// Manifest entry name inside the zip container.
pub const MANIFEST_NAME: &str = "manifest.json";

/// Prefix under which encrypted file entries are stored.
pub(crate) const ENTRY_PREFIX: &str = "files/";

/// Current archive format version.
pub const FORMAT_VERSION: u32 = 1;

/// One wrapped content key, addressed by the recipient's public-key
/// fingerprint so decryption never has to trial-open every entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecipientEntry {
    pub fingerprint: String,
    pub sealed_key: SealedKey,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArchiveManifest {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub recipients: Vec<RecipientEntry>,
    /// Bare entry names, in the order they were added.
    pub files: Vec<String>,
}

impl ArchiveManifest {
    /// Finds the sealed key addressed to `fingerprint`, if any.
    pub fn recipient(&self, fingerprint: &str) -> Option<&RecipientEntry> {
        self.recipients
            .iter()
            .find(|entry| entry.fingerprint == fingerprint)
    }
}
