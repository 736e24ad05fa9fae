//! Credential parsing for `DOTENV_KEY`.
//!
//! Responsibilities:
//! - Split the key-material string into comma-separated URI segments.
//! - Extract the decryption key (URI password) and target environment
//!   (`environment` query parameter) from each segment.
//! - Derive the vault lookup identifier for each target environment.
//!
//! Does NOT handle:
//! - Looking up or decrypting ciphertext (see `vault`).
//! - Reading `DOTENV_KEY` from the process environment (see `loader`).
//!
//! Invariants:
//! - Output order equals segment order in the input string.
//! - Key material is held in `SecretString` and never appears in errors or `Debug` output.
//! - Validation is eager: every segment is fully checked before any lookup happens.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::constants::{ENVIRONMENT_PARAM, KEY_BYTES, KEY_HEX_LENGTH, VAULT_ENTRY_PREFIX};
use crate::error::VaultError;

/// One parsed segment of the key-material string.
#[derive(Debug)]
pub struct CredentialEntry {
    position: usize,
    decryption_key: SecretString,
    target_label: String,
    lookup_id: String,
}

impl CredentialEntry {
    /// Zero-based position of this segment in the key-material string.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Target environment label as written in the credential.
    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    /// Vault entry name holding this environment's ciphertext.
    pub fn lookup_id(&self) -> &str {
        &self.lookup_id
    }

    /// Decode the 32-byte AES key, ignoring any non-key prefix such as `key_`.
    pub fn key_bytes(&self) -> Result<[u8; KEY_BYTES], hex::FromHexError> {
        let hex_key = key_hex(self.decryption_key.expose_secret())
            .ok_or(hex::FromHexError::InvalidStringLength)?;
        let mut key = [0u8; KEY_BYTES];
        hex::decode_to_slice(hex_key, &mut key)?;
        Ok(key)
    }
}

impl PartialEq for CredentialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.target_label == other.target_label
            && self.lookup_id == other.lookup_id
            && self.decryption_key.expose_secret() == other.decryption_key.expose_secret()
    }
}

impl Eq for CredentialEntry {}

/// Build the vault entry name for an environment label.
///
/// The label is matched case-insensitively, so it is uppercased verbatim.
pub fn lookup_id(label: &str) -> String {
    format!("{}{}", VAULT_ENTRY_PREFIX, label.to_uppercase())
}

/// Parse the full key-material string into its ordered credential entries.
///
/// Segments are separated by commas; surrounding whitespace is ignored.
/// The first invalid segment aborts parsing.
pub fn parse_key_material(material: &str) -> Result<Vec<CredentialEntry>, VaultError> {
    material
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, segment)| parse_credential(segment, position))
        .collect()
}

/// Parse a single `dotenv://:<key>@host/path?environment=<label>` segment.
///
/// Checks run in a fixed order: key presence, then environment label, then
/// key length. A segment with neither a long enough key nor a label reports
/// the missing label.
pub fn parse_credential(segment: &str, position: usize) -> Result<CredentialEntry, VaultError> {
    let uri = Url::parse(segment).map_err(|_| VaultError::InvalidKeyFormat { position })?;

    let key = match uri.password() {
        Some(password) if !password.is_empty() => password,
        _ => return Err(VaultError::InvalidKeyFormat { position }),
    };

    // A repeated `environment` parameter resolves to its last value.
    let target_label = uri
        .query_pairs()
        .filter(|(name, _)| *name == ENVIRONMENT_PARAM)
        .last()
        .map(|(_, value)| value.into_owned())
        .filter(|label| !label.is_empty())
        .ok_or(VaultError::MissingEnvironmentLabel { position })?;

    if key_hex(key).is_none() {
        return Err(VaultError::KeyTooShort { position });
    }

    tracing::debug!(position, label = %target_label, "parsed DOTENV_KEY segment");

    Ok(CredentialEntry {
        position,
        decryption_key: SecretString::new(key.into()),
        lookup_id: lookup_id(&target_label),
        target_label,
    })
}

/// Return the trailing key material of a credential, if long enough.
///
/// Significant characters are the trailing run of hex digits; anything
/// before it is a format tag.
fn key_hex(raw: &str) -> Option<&str> {
    let run = raw
        .bytes()
        .rev()
        .take_while(u8::is_ascii_hexdigit)
        .count();
    let significant = &raw[raw.len() - run..];
    (significant.len() >= KEY_HEX_LENGTH).then(|| &significant[significant.len() - KEY_HEX_LENGTH..])
}
