//! Cryptographic primitives for encrypted study-results packaging.
//!
//! A study job's output files are encrypted once and addressed to many
//! reviewers using a two-tier key scheme:
//!
//! 1. **Content Key**: a random 32-byte key generated per archive. Every
//!    file entry in the archive is encrypted under it with
//!    ChaCha20-Poly1305.
//!
//! 2. **Sealed Key**: the content key wrapped separately for each
//!    recipient with X25519 + XSalsa20-Poly1305. Any single recipient's
//!    private key recovers the content key, and with it every entry.
//!
//! Recipients are identified by a **fingerprint** (SHA-256 of the raw
//! public key), which lets a reviewer locate their wrapped key without
//! trial-decrypting every entry. Reviewers transport their private key as
//! PEM text; see [`keypair`].

mod cipher;
mod error;
mod key;

pub mod envelope;
pub mod keypair;

pub use cipher::{decrypt, encrypt, EncryptedData, NONCE_SIZE, TAG_SIZE};
pub use envelope::{open_content_key, seal_content_key, SealedKey};
pub use error::{CryptoError, CryptoResult};
pub use key::{ContentKey, KEY_SIZE};
pub use keypair::{
    fingerprint_from_private_key, fingerprint_public_key, pem_to_bytes, ReviewerKeyPair,
};

// Key types recipients and archives are built from.
pub use crypto_box::{PublicKey, SecretKey};
