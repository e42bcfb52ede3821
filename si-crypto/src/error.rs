//! Crypto layer error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors from key handling, sealing, and authenticated encryption.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Wrong key and tampered data are deliberately indistinguishable.
    #[error("decryption failed (wrong key or tampered data)")]
    Decryption,

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("malformed PEM: {0}")]
    MalformedPem(String),
}
