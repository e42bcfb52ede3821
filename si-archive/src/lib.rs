//! Multi-recipient encrypted results archive.
//!
//! The archive is a zip container holding `manifest.json` plus one
//! encrypted entry per result file. A fresh content key encrypts every
//! entry (ChaCha20-Poly1305 with the bare entry name as associated data);
//! the key is sealed separately to each recipient's X25519 public key and
//! listed in the manifest under that recipient's public-key fingerprint.
//! A reviewer therefore finds their wrapped key by fingerprint lookup, and
//! any single recipient's private key recovers all entries.
//!
//! Both operations are single-shot and stateless: [`ResultsWriter`]
//! produces one atomic blob per call, [`ResultsReader`] re-does its work
//! on every fresh construction.

mod error;
mod manifest;
mod reader;
mod writer;

pub use error::{ArchiveError, ArchiveResult};
pub use manifest::{ArchiveManifest, RecipientEntry, FORMAT_VERSION, MANIFEST_NAME};
pub use reader::{DecryptedFile, ResultsReader};
pub use writer::{Recipient, ResultsWriter};
