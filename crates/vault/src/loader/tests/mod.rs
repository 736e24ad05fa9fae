//! Tests for the vault loader builder.
//!
//! Responsibilities:
//! - Test plain `.env` loading, the override flag, and the `DOTENV_DISABLED` gate.
//! - Test vault mode end to end: discovery, decryption, and forced override.
//!
//! Invariants:
//! - Tests use `env_lock()` to serialize mutations of process-global state (cwd/env).
//! - Every variable a test writes has a unique `_DVT_` name.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Encrypt `plaintext` the way a vault build does: base64(nonce || ciphertext || tag).
pub fn seal(plaintext: &str, key: &[u8; 32]) -> String {
    let nonce = [0x24u8; 12];
    let cipher = Aes256Gcm::new(key.into());
    let mut blob = nonce.to_vec();
    blob.extend(
        cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .unwrap(),
    );
    STANDARD.encode(blob)
}

/// Build a `DOTENV_KEY` segment for `key` targeting `label`.
pub fn credential(key: &[u8; 32], label: &str) -> String {
    format!(
        "dotenv://:key_{}@dotenv.local/vault/.env.vault?environment={}",
        hex::encode(key),
        label
    )
}

/// Remove variables so tests start from a known state.
pub fn clear_vars(keys: &[&str]) {
    for key in keys {
        unsafe {
            std::env::remove_var(key);
        }
    }
}
