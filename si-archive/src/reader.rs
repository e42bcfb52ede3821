//! Results reader: locates the caller's sealed key and decrypts entries.

use crate::error::{ArchiveError, ArchiveResult};
use crate::manifest::{ArchiveManifest, ENTRY_PREFIX, MANIFEST_NAME};
use si_crypto::{decrypt, open_content_key, ContentKey, EncryptedData, SecretKey};
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

/// One decrypted archive entry, held in memory for review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptedFile {
    /// The exact name supplied at packaging time.
    pub path: String,
    pub contents: Vec<u8>,
}

/// Opens an archive with a reviewer's private key and extracts its files.
pub struct ResultsReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    manifest: ArchiveManifest,
    content_key: ContentKey,
}

impl ResultsReader {
    /// Parses the container, looks up the recipient entry matching
    /// `fingerprint`, and opens the sealed content key.
    ///
    /// Fails with [`ArchiveError::InvalidKey`] when the fingerprint matches
    /// no recipient or the sealed key does not open under `private_key` —
    /// the caller cannot tell which.
    pub fn new(
        archive_bytes: Vec<u8>,
        private_key: &SecretKey,
        fingerprint: &str,
    ) -> ArchiveResult<Self> {
        let mut archive = ZipArchive::new(Cursor::new(archive_bytes))
            .map_err(|e| ArchiveError::Malformed(format!("not a results archive: {e}")))?;
        let manifest = read_manifest(&mut archive)?;

        let entry = manifest
            .recipient(fingerprint)
            .ok_or(ArchiveError::InvalidKey)?;
        let content_key = open_content_key(&entry.sealed_key, private_key)
            .map_err(|_| ArchiveError::InvalidKey)?;

        debug!(
            files = manifest.files.len(),
            "opened results archive for recipient"
        );
        Ok(Self {
            archive,
            manifest,
            content_key,
        })
    }

    pub fn manifest(&self) -> &ArchiveManifest {
        &self.manifest
    }

    /// Decrypts every entry, in the order they were packaged.
    ///
    /// A fresh call re-does the work; nothing is cached between calls.
    pub fn extract_files(&mut self) -> ArchiveResult<Vec<DecryptedFile>> {
        let names = self.manifest.files.clone();
        let mut files = Vec::with_capacity(names.len());

        for name in names {
            let mut framed = Vec::new();
            {
                let mut entry = self
                    .archive
                    .by_name(&format!("{ENTRY_PREFIX}{name}"))
                    .map_err(|_| {
                        ArchiveError::Malformed(format!("missing entry for listed file {name}"))
                    })?;
                entry.read_to_end(&mut framed)?;
            }

            let encrypted = EncryptedData::from_bytes(&framed)
                .map_err(|_| ArchiveError::Malformed(format!("truncated entry {name}")))?;
            let contents = decrypt(&self.content_key, &encrypted, name.as_bytes())
                .map_err(|_| ArchiveError::InvalidKey)?;

            files.push(DecryptedFile {
                path: name,
                contents,
            });
        }

        Ok(files)
    }
}

fn read_manifest(archive: &mut ZipArchive<Cursor<Vec<u8>>>) -> ArchiveResult<ArchiveManifest> {
    let mut body = Vec::new();
    archive
        .by_name(MANIFEST_NAME)
        .map_err(|_| ArchiveError::Malformed("missing manifest.json".into()))?
        .read_to_end(&mut body)?;

    let manifest: ArchiveManifest = serde_json::from_slice(&body)
        .map_err(|e| ArchiveError::Malformed(format!("unreadable manifest: {e}")))?;

    if manifest.version != crate::manifest::FORMAT_VERSION {
        return Err(ArchiveError::Malformed(format!(
            "unsupported archive version {}",
            manifest.version
        )));
    }
    Ok(manifest)
}
