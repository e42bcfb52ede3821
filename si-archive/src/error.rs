//! Archive error types.

use thiserror::Error;

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Errors from packaging and decrypting results archives.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive requires at least one recipient")]
    NoRecipients,

    #[error("recipient key for fingerprint {fingerprint} is malformed: {reason}")]
    InvalidRecipientKey { fingerprint: String, reason: String },

    #[error("duplicate archive entry: {0}")]
    DuplicateEntry(String),

    #[error("invalid archive entry name: {0}")]
    InvalidEntryName(String),

    /// Covers both fingerprint-not-found and failed authentication.
    /// Callers must not be able to tell the two apart.
    #[error("private key is not valid for this archive")]
    InvalidKey,

    #[error("malformed archive: {0}")]
    Malformed(String),

    #[error("crypto error: {0}")]
    Crypto(#[from] si_crypto::CryptoError),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
