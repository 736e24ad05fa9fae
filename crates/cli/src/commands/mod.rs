//! CLI command implementations.

pub mod check;
pub mod completions;
pub mod decrypt;
pub mod run;

use anyhow::{Context, Result};
use dotenv_vault::{
    CredentialEntry, VaultError, VaultLoader, VaultRecords, locate_vault, parse_key_material,
};
use std::path::PathBuf;

use crate::args::Cli;

/// Global options that say where the vault is and how to open it.
pub struct VaultSource {
    key: Option<String>,
    vault_path: Option<PathBuf>,
    search_root: Option<PathBuf>,
}

/// A vault file read from disk together with the parsed credentials for it.
pub struct OpenedVault {
    pub path: PathBuf,
    pub records: VaultRecords,
    pub entries: Vec<CredentialEntry>,
}

impl VaultSource {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            key: cli.key_material(),
            vault_path: cli.vault_path.clone(),
            search_root: cli.search_root.clone(),
        }
    }

    /// Loader configured with these options; plain mode only when no key is given.
    pub fn loader(&self) -> VaultLoader {
        let mut loader = VaultLoader::new();
        if let Some(ref key) = self.key {
            loader = loader.with_key_material(key.clone());
        }
        if let Some(ref path) = self.vault_path {
            loader = loader.with_vault_path(path.clone());
        }
        if let Some(ref dir) = self.search_root {
            loader = loader.with_search_root(dir.clone());
        }
        loader
    }

    /// Locate and read the vault, then parse the key material.
    ///
    /// The vault is located before the key material is parsed, so a missing
    /// vault is reported even when the key is also malformed.
    pub fn open(&self) -> Result<OpenedVault> {
        let path = match &self.vault_path {
            Some(path) => path.clone(),
            None => {
                let root = match &self.search_root {
                    Some(dir) => dir.clone(),
                    None => std::env::current_dir().context("failed to read current directory")?,
                };
                locate_vault(&root)?
            }
        };
        let records = VaultRecords::from_path(&path)?;

        let material = self
            .key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(VaultError::MissingKeyMaterial)?;
        let entries = parse_key_material(material)?;

        Ok(OpenedVault {
            path,
            records,
            entries,
        })
    }
}
