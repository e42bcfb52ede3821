//! Per-recipient content-key wrapping.
//!
//! Uses X25519 key exchange + XSalsa20-Poly1305 to seal an archive's
//! content key to each recipient's public key. A fresh ephemeral keypair
//! is generated per seal, so archives do not reveal the packaging party
//! and the same content key sealed twice yields unrelated ciphertexts.

use crate::error::{CryptoError, CryptoResult};
use crate::key::ContentKey;
use crypto_box::aead::Aead;
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Archive content key sealed to one recipient's X25519 public key.
///
/// The ephemeral public key is included so the recipient can reconstruct
/// the shared secret from their private key alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedKey {
    /// Ephemeral X25519 public key (packager side of DH).
    pub ephemeral_public_key: [u8; 32],
    /// XSalsa20 nonce (24 bytes).
    pub nonce: [u8; 24],
    /// Encrypted content key (ciphertext + Poly1305 tag).
    pub ciphertext: Vec<u8>,
}

/// Seals a content key for one recipient.
pub fn seal_content_key(key: &ContentKey, recipient_pk: &PublicKey) -> CryptoResult<SealedKey> {
    let ephemeral = SecretKey::generate(&mut OsRng);
    let ephemeral_pk = ephemeral.public_key();

    let salsa_box = SalsaBox::new(recipient_pk, &ephemeral);

    let mut nonce_bytes = [0u8; 24];
    OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = salsa_box
        .encrypt(
            crypto_box::Nonce::from_slice(&nonce_bytes),
            key.as_bytes().as_slice(),
        )
        .map_err(|e| CryptoError::Encryption(format!("key seal failed: {e}")))?;

    Ok(SealedKey {
        ephemeral_public_key: *ephemeral_pk.as_bytes(),
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Opens a sealed content key with the recipient's private key.
///
/// Fails with [`CryptoError::Decryption`] for a wrong key or a tampered
/// envelope; the two cases are not distinguished.
pub fn open_content_key(sealed: &SealedKey, recipient_sk: &SecretKey) -> CryptoResult<ContentKey> {
    let ephemeral_pk = PublicKey::from(sealed.ephemeral_public_key);
    let salsa_box = SalsaBox::new(&ephemeral_pk, recipient_sk);

    let plaintext = salsa_box
        .decrypt(
            crypto_box::Nonce::from_slice(&sealed.nonce),
            sealed.ciphertext.as_ref(),
        )
        .map_err(|_| CryptoError::Decryption)?;

    ContentKey::try_from_slice(&plaintext)
}
