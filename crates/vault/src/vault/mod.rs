//! Vault decryption with key rotation.
//!
//! Responsibilities:
//! - Resolve each credential's ciphertext from the vault records.
//! - Try each candidate key in order and return the first authenticated plaintext.
//!
//! Does NOT handle:
//! - Parsing `DOTENV_KEY` (see `credential`).
//! - Locating the vault file or applying variables (see `loader`).
//!
//! Invariants / Assumptions:
//! - Every credential's ciphertext is resolved before any decryption is attempted,
//!   so a missing environment is reported even when an earlier key would work.
//! - A missing environment is a configuration error and is never retried.
//! - Any per-candidate decryption failure moves on to the next candidate.
//! - Rotation stops at the first success.

mod cipher;
mod payload;
mod records;

pub use cipher::{DecryptError, decrypt_ciphertext};
pub use payload::DecryptedPayload;
pub use records::VaultRecords;

use crate::constants::DOTENV_KEY_VAR;
use crate::credential::{CredentialEntry, parse_key_material};
use crate::error::VaultError;
use crate::loader::env_var_or_none;

/// Decrypt the vault with the first credential that authenticates.
pub fn decrypt_vault(
    entries: &[CredentialEntry],
    records: &VaultRecords,
) -> Result<DecryptedPayload, VaultError> {
    let candidates = entries
        .iter()
        .map(|entry| {
            records
                .ciphertext(entry.lookup_id())
                .map(|ciphertext| (entry, ciphertext))
                .ok_or_else(|| VaultError::EnvironmentNotInVault {
                    lookup_id: entry.lookup_id().to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (entry, ciphertext) in &candidates {
        match try_candidate(entry, ciphertext) {
            Ok(plaintext) => {
                tracing::info!(
                    position = entry.position(),
                    environment = entry.lookup_id(),
                    "decrypted vault"
                );
                let text =
                    String::from_utf8(plaintext).map_err(|_| VaultError::InvalidPlaintextEncoding)?;
                return Ok(DecryptedPayload::new(
                    text,
                    entry.position(),
                    entry.lookup_id().to_string(),
                ));
            }
            Err(reason) => {
                tracing::debug!(
                    position = entry.position(),
                    environment = entry.lookup_id(),
                    %reason,
                    "key did not open vault, trying next"
                );
            }
        }
    }

    Err(VaultError::AllKeysInvalid {
        attempts: candidates.len(),
    })
}

/// Parse `DOTENV_KEY` from the process environment and decrypt the vault.
pub fn decrypt_vault_from_env(records: &VaultRecords) -> Result<DecryptedPayload, VaultError> {
    let material = env_var_or_none(DOTENV_KEY_VAR).ok_or(VaultError::MissingKeyMaterial)?;
    let entries = parse_key_material(&material)?;
    decrypt_vault(&entries, records)
}

fn try_candidate(entry: &CredentialEntry, ciphertext: &str) -> Result<Vec<u8>, DecryptError> {
    let key = entry.key_bytes().map_err(|_| DecryptError::InvalidKey)?;
    decrypt_ciphertext(ciphertext, &key)
}
