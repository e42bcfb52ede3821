//! Error taxonomy for results orchestration.
//!
//! `KeyParse` and `InvalidKey` are the two user-facing classes: the first
//! means "check the key was copied correctly", the second "this key does
//! not open these results". Everything else fails the workflow step and is
//! surfaced administratively, never rendered as crypto detail.

use thiserror::Error;

/// Result type for results operations.
pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(Debug, Error)]
pub enum ResultsError {
    /// Administrative misconfiguration, e.g. an org with no enrolled keys.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The supplied private key text could not be parsed.
    #[error("invalid key data, check that the key was copied correctly")]
    KeyParse(#[source] si_crypto::CryptoError),

    /// The key parsed but does not open these results. Deliberately covers
    /// both a non-matching key and a tampered archive.
    #[error("private key is not valid for these results")]
    InvalidKey,

    /// Fetch/store failure around the archive itself; retried only by
    /// explicit user action, never automatically.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("archive error: {0}")]
    Archive(#[from] si_archive::ArchiveError),

    #[error("crypto error: {0}")]
    Crypto(#[from] si_crypto::CryptoError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
