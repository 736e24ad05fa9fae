//! Vault decrypt command.
//!
//! Responsibilities:
//! - Decrypt the vault with rotation and write the plaintext to stdout verbatim.
//!
//! Invariants:
//! - Nothing is written to stdout unless decryption succeeds.

use anyhow::{Context, Result};
use dotenv_vault::decrypt_vault;
use std::io::{self, Write};

use super::VaultSource;

pub fn run(source: &VaultSource) -> Result<()> {
    let opened = source.open()?;
    let payload = decrypt_vault(&opened.entries, &opened.records)?;

    tracing::info!(
        vault = %opened.path.display(),
        environment = payload.lookup_id(),
        "writing decrypted payload"
    );

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(payload.expose_secret().as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write decrypted payload to stdout")
}
