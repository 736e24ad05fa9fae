//! Upward file discovery.
//!
//! Responsibilities:
//! - Find a named file in a directory or any of its ancestors.
//! - Locate the `.env.vault` file for vault mode.
//!
//! Invariants:
//! - The nearest match wins; search stops at the filesystem root.
//! - Only regular files match; a directory with the same name is skipped.

use std::path::{Path, PathBuf};

use crate::constants::VAULT_FILE;
use crate::error::VaultError;

/// Search `start_dir` and its ancestors for a file named `filename`.
pub fn locate_file(filename: &str, start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// Locate the vault file starting at `start_dir`.
pub fn locate_vault(start_dir: &Path) -> Result<PathBuf, VaultError> {
    match locate_file(VAULT_FILE, start_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "found vault file");
            Ok(path)
        }
        None => {
            tracing::warn!(
                search_root = %start_dir.display(),
                "DOTENV_KEY is set but no {} file was found. Did you forget to build it?",
                VAULT_FILE
            );
            Err(VaultError::VaultFileNotFound {
                filename: VAULT_FILE.to_string(),
                search_root: start_dir.to_path_buf(),
            })
        }
    }
}
