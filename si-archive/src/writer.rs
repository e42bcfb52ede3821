//! Results writer: packages files into one archive any recipient can open.

use crate::error::{ArchiveError, ArchiveResult};
use crate::manifest::{ArchiveManifest, RecipientEntry, ENTRY_PREFIX, FORMAT_VERSION, MANIFEST_NAME};
use chrono::Utc;
use si_crypto::{encrypt, seal_content_key, ContentKey, PublicKey};
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A recipient's public key plus its content-derived fingerprint.
#[derive(Clone, Debug)]
pub struct Recipient {
    /// Raw X25519 public key (32 bytes).
    pub public_key: Vec<u8>,
    pub fingerprint: String,
}

/// Builds one encrypted archive for a fixed recipient set.
///
/// Recipient keys are validated and the content key sealed up front, so
/// configuration errors surface before any file is accepted. `generate`
/// consumes the writer; a partially built archive is never observable.
pub struct ResultsWriter {
    content_key: ContentKey,
    recipients: Vec<RecipientEntry>,
    /// Entry name and its encrypted framing bytes.
    entries: Vec<(String, Vec<u8>)>,
}

impl ResultsWriter {
    /// Creates a writer addressed to `recipients`.
    ///
    /// Fails fast on an empty recipient list, a malformed key, or a
    /// repeated fingerprint.
    pub fn new(recipients: &[Recipient]) -> ArchiveResult<Self> {
        if recipients.is_empty() {
            return Err(ArchiveError::NoRecipients);
        }

        let content_key = ContentKey::generate();
        let mut sealed = Vec::with_capacity(recipients.len());

        for recipient in recipients {
            if sealed
                .iter()
                .any(|entry: &RecipientEntry| entry.fingerprint == recipient.fingerprint)
            {
                return Err(ArchiveError::InvalidRecipientKey {
                    fingerprint: recipient.fingerprint.clone(),
                    reason: "fingerprint listed twice".into(),
                });
            }

            let raw: [u8; 32] = recipient.public_key.as_slice().try_into().map_err(|_| {
                ArchiveError::InvalidRecipientKey {
                    fingerprint: recipient.fingerprint.clone(),
                    reason: format!(
                        "expected 32 key bytes, got {}",
                        recipient.public_key.len()
                    ),
                }
            })?;

            let sealed_key = seal_content_key(&content_key, &PublicKey::from(raw))?;
            sealed.push(RecipientEntry {
                fingerprint: recipient.fingerprint.clone(),
                sealed_key,
            });
        }

        Ok(Self {
            content_key,
            recipients: sealed,
            entries: Vec::new(),
        })
    }

    /// Encrypts `contents` and records it under `name`.
    ///
    /// Names form a flat namespace: non-empty, no path separators, unique
    /// within the archive.
    pub fn add_file(&mut self, name: &str, contents: &[u8]) -> ArchiveResult<()> {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(ArchiveError::InvalidEntryName(name.to_string()));
        }
        if self.entries.iter().any(|(existing, _)| existing == name) {
            return Err(ArchiveError::DuplicateEntry(name.to_string()));
        }

        // The entry name rides along as associated data, so a renamed
        // entry fails authentication at extract time.
        let encrypted = encrypt(&self.content_key, contents, name.as_bytes())?;
        self.entries.push((name.to_string(), encrypted.to_bytes()));
        Ok(())
    }

    /// Produces the archive bytes, consuming the writer.
    pub fn generate(self) -> ArchiveResult<Vec<u8>> {
        let manifest = ArchiveManifest {
            version: FORMAT_VERSION,
            created_at: Utc::now(),
            recipients: self.recipients,
            files: self.entries.iter().map(|(name, _)| name.clone()).collect(),
        };

        // Ciphertext does not compress; store entries as-is.
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        zip.start_file(MANIFEST_NAME, options)?;
        zip.write_all(&serde_json::to_vec(&manifest).map_err(|e| {
            ArchiveError::Malformed(format!("manifest serialization failed: {e}"))
        })?)?;

        for (name, framed) in &self.entries {
            zip.start_file(format!("{ENTRY_PREFIX}{name}"), options)?;
            zip.write_all(framed)?;
        }

        let cursor = zip.finish()?;
        let bytes = cursor.into_inner();
        debug!(
            entries = manifest.files.len(),
            recipients = manifest.recipients.len(),
            size = bytes.len(),
            "generated results archive"
        );
        Ok(bytes)
    }
}
