//! AES-256-GCM decryption of a single vault entry.
//!
//! Responsibilities:
//! - Decode the base64 ciphertext and split off the 12-byte nonce.
//! - Decrypt and authenticate the remainder with AES-256-GCM, no associated data.
//!
//! Does NOT handle:
//! - Choosing between candidate keys (see `vault::decrypt_vault`).
//! - UTF-8 validation of the plaintext.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::constants::{KEY_BYTES, NONCE_BYTES, TAG_BYTES};

/// Failure to decrypt one ciphertext with one key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecryptError {
    /// The ciphertext is not valid base64.
    #[error("ciphertext is not valid base64")]
    Base64,

    /// The decoded ciphertext cannot hold a nonce and an authentication tag.
    #[error("ciphertext is {len} bytes, shorter than nonce and tag")]
    Truncated { len: usize },

    /// The key material could not be decoded into an AES key.
    #[error("key material is not a 32-byte hex key")]
    InvalidKey,

    /// The tag did not verify: this key does not match this ciphertext.
    #[error("authentication failed")]
    Authentication,
}

/// Decrypt a base64 `nonce || ciphertext || tag` blob with a 32-byte key.
pub fn decrypt_ciphertext(ciphertext: &str, key: &[u8; KEY_BYTES]) -> Result<Vec<u8>, DecryptError> {
    let raw = STANDARD
        .decode(ciphertext.trim())
        .map_err(|_| DecryptError::Base64)?;

    if raw.len() < NONCE_BYTES + TAG_BYTES {
        return Err(DecryptError::Truncated { len: raw.len() });
    }

    let (nonce, sealed) = raw.split_at(NONCE_BYTES);
    let cipher = Aes256Gcm::new(key.into());

    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| DecryptError::Authentication)
}
