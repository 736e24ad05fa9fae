//! Decrypted vault payload.

use std::io::{Cursor, Read};

use secrecy::{ExposeSecret, SecretString};

use crate::error::VaultError;

/// Plaintext of the vault entry that decrypted, in dotenv syntax.
#[derive(Debug)]
pub struct DecryptedPayload {
    text: SecretString,
    position: usize,
    lookup_id: String,
}

impl DecryptedPayload {
    pub(crate) fn new(text: String, position: usize, lookup_id: String) -> Self {
        Self {
            text: SecretString::new(text.into()),
            position,
            lookup_id,
        }
    }

    /// Position in `DOTENV_KEY` of the credential that opened the vault.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Vault entry that was decrypted.
    pub fn lookup_id(&self) -> &str {
        &self.lookup_id
    }

    /// The plaintext as a string.
    pub fn expose_secret(&self) -> &str {
        self.text.expose_secret()
    }

    /// The plaintext as a readable stream for a dotenv parser.
    pub fn reader(&self) -> impl Read + '_ {
        Cursor::new(self.text.expose_secret().as_bytes())
    }

    /// Parse the plaintext into ordered `(key, value)` pairs.
    pub fn pairs(&self) -> Result<Vec<(String, String)>, VaultError> {
        dotenvy::from_read_iter(self.reader())
            .map(|item| {
                item.map_err(|e| match e {
                    dotenvy::Error::LineParse(_, idx) => {
                        VaultError::PlaintextParse { error_index: idx }
                    }
                    _ => VaultError::DotenvUnknown,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_preserve_order_and_quotes() {
        let payload = DecryptedPayload::new(
            "# comment\nZETA=\"last one\"\nALPHA='first'\nPORT=8080\n".to_string(),
            0,
            "DOTENV_VAULT_CI".to_string(),
        );

        let pairs = payload.pairs().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("ZETA".to_string(), "last one".to_string()),
                ("ALPHA".to_string(), "first".to_string()),
                ("PORT".to_string(), "8080".to_string()),
            ]
        );
    }

    #[test]
    fn test_reader_yields_exact_bytes() {
        let payload = DecryptedPayload::new("HELLO=world\n".to_string(), 1, "X".to_string());
        let mut out = String::new();
        payload.reader().read_to_string(&mut out).unwrap();
        assert_eq!(out, "HELLO=world\n");
    }

    #[test]
    fn test_parse_error_hides_plaintext() {
        let payload = DecryptedPayload::new(
            "TOKEN=abc\nleaky secret value".to_string(),
            0,
            "DOTENV_VAULT_CI".to_string(),
        );

        let err = payload.pairs().unwrap_err();
        assert!(matches!(err, VaultError::PlaintextParse { .. }));
        assert!(!err.to_string().contains("leaky"));
    }

    #[test]
    fn test_debug_redacts_plaintext() {
        let payload = DecryptedPayload::new("PASSWORD=hunter2".to_string(), 0, "X".to_string());
        assert!(!format!("{:?}", payload).contains("hunter2"));
    }
}
