//! Vault loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `VaultLoader` that selects plain or vault mode.
//! - Resolve variables from `.env` (plain) or `.env.vault` + `DOTENV_KEY` (vault).
//! - Apply resolved variables to the process environment.
//!
//! Does NOT handle:
//! - Credential parsing or decryption (see `credential` and `vault`).
//! - Direct environment variable access (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Vault mode is selected whenever key material is present, even if it is
//!   blank, and vault values always override existing variables.
//! - The `DOTENV_DISABLED` variable gates plain mode only.
//! - A missing `.env` file is not an error; a missing `.env.vault` in vault mode is.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use super::discovery::{locate_file, locate_vault};
use super::env::apply_to_process_environment;
use crate::constants::{DOTENV_DISABLED_VAR, DOTENV_KEY_VAR, ENV_FILE};
use crate::credential::parse_key_material;
use crate::error::VaultError;
use crate::vault::{VaultRecords, decrypt_vault};

/// Which source a loader reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Plain `.env` file.
    Plain,
    /// Encrypted `.env.vault` file opened with `DOTENV_KEY`.
    Vault,
    /// Plain mode switched off by `DOTENV_DISABLED`.
    Disabled,
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Vault => write!(f, "vault"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// Summary of a completed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub mode: LoadMode,
    /// File the variables came from, if any.
    pub source: Option<PathBuf>,
    /// Vault entry that was decrypted (vault mode only).
    pub lookup_id: Option<String>,
    /// Number of variables written to the process environment.
    pub applied: usize,
}

/// Variables resolved by a loader but not yet applied.
pub struct Resolved {
    mode: LoadMode,
    source: Option<PathBuf>,
    lookup_id: Option<String>,
    pairs: Vec<(String, String)>,
    override_existing: bool,
}

impl Resolved {
    fn empty(mode: LoadMode, override_existing: bool) -> Self {
        Self {
            mode,
            source: None,
            lookup_id: None,
            pairs: Vec::new(),
            override_existing,
        }
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn lookup_id(&self) -> Option<&str> {
        self.lookup_id.as_deref()
    }

    /// Resolved variables in file order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Whether these variables replace ones already set.
    pub fn override_existing(&self) -> bool {
        self.override_existing
    }

    /// Write the variables into the process environment.
    pub fn apply(self) -> LoadReport {
        let applied = apply_to_process_environment(&self.pairs, self.override_existing);
        LoadReport {
            mode: self.mode,
            source: self.source,
            lookup_id: self.lookup_id,
            applied,
        }
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("mode", &self.mode)
            .field("source", &self.source)
            .field("lookup_id", &self.lookup_id)
            .field("variables", &self.pairs.len())
            .field("override_existing", &self.override_existing)
            .finish()
    }
}

/// Loader that fills the process environment from `.env` or `.env.vault`.
#[derive(Debug)]
pub struct VaultLoader {
    key_material: Option<SecretString>,
    vault_path: Option<PathBuf>,
    dotenv_path: Option<PathBuf>,
    search_root: Option<PathBuf>,
    override_existing: bool,
}

impl Default for VaultLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultLoader {
    /// Create a new loader with no key material.
    pub fn new() -> Self {
        Self {
            key_material: None,
            vault_path: None,
            dotenv_path: None,
            search_root: None,
            override_existing: true,
        }
    }

    /// Check if plain dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Read `DOTENV_KEY` from the environment unless key material was already set.
    ///
    /// A set but blank `DOTENV_KEY` still selects vault mode and fails to resolve
    /// with `MissingKeyMaterial`.
    pub fn from_env(mut self) -> Self {
        if self.key_material.is_none() && std::env::var_os(DOTENV_KEY_VAR).is_some() {
            let material = std::env::var(DOTENV_KEY_VAR).unwrap_or_default();
            self.key_material = Some(SecretString::new(material.into()));
        }
        self
    }

    /// Set the key material directly (same format as `DOTENV_KEY`).
    pub fn with_key_material(mut self, material: String) -> Self {
        self.key_material = Some(SecretString::new(material.into()));
        self
    }

    /// Read the vault from this path instead of searching for `.env.vault`.
    pub fn with_vault_path(mut self, path: PathBuf) -> Self {
        self.vault_path = Some(path);
        self
    }

    /// Read plain mode variables from this path instead of searching for `.env`.
    pub fn with_dotenv_path(mut self, path: PathBuf) -> Self {
        self.dotenv_path = Some(path);
        self
    }

    /// Directory to start file discovery from (defaults to the current directory).
    pub fn with_search_root(mut self, dir: PathBuf) -> Self {
        self.search_root = Some(dir);
        self
    }

    /// Whether plain mode replaces variables that are already set.
    ///
    /// Vault mode always overrides regardless of this setting.
    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// The mode `resolve()` and `load()` will use.
    pub fn mode(&self) -> LoadMode {
        if self.key_material.is_some() {
            LoadMode::Vault
        } else if Self::dotenv_disabled() {
            LoadMode::Disabled
        } else {
            LoadMode::Plain
        }
    }

    /// Resolve variables without touching the process environment.
    pub fn resolve(&self) -> Result<Resolved, VaultError> {
        match self.mode() {
            LoadMode::Vault => self.resolve_vault(),
            LoadMode::Plain => self.resolve_plain(),
            LoadMode::Disabled => {
                tracing::debug!("{} is set, skipping .env loading", DOTENV_DISABLED_VAR);
                Ok(Resolved::empty(LoadMode::Disabled, self.override_existing))
            }
        }
    }

    /// Resolve variables and apply them to the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Vault mode cannot locate or parse `.env.vault`
    /// - `DOTENV_KEY` is malformed or names an environment the vault lacks
    /// - No key decrypts the vault
    /// - The `.env` file exists but has invalid syntax or cannot be read
    ///
    /// Nothing is applied when an error is returned.
    pub fn load(self) -> Result<LoadReport, VaultError> {
        let report = self.resolve()?.apply();
        tracing::info!(
            mode = %report.mode,
            applied = report.applied,
            "environment loaded"
        );
        Ok(report)
    }

    /// Load plain dotenv text from a stream, honoring the override setting.
    pub fn load_from_reader<R: Read>(self, reader: R) -> Result<LoadReport, VaultError> {
        let pairs = dotenvy::from_read_iter(reader)
            .map(|item| item.map_err(VaultError::from_dotenv))
            .collect::<Result<Vec<_>, _>>()?;

        let resolved = Resolved {
            pairs,
            ..Resolved::empty(LoadMode::Plain, self.override_existing)
        };
        Ok(resolved.apply())
    }

    fn search_root(&self) -> Result<PathBuf, VaultError> {
        match &self.search_root {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| VaultError::Io {
                path: PathBuf::from("."),
                kind: e.kind(),
            }),
        }
    }

    fn resolve_vault(&self) -> Result<Resolved, VaultError> {
        let material = self
            .key_material
            .as_ref()
            .map(|material| material.expose_secret())
            .filter(|material| !material.trim().is_empty())
            .ok_or(VaultError::MissingKeyMaterial)?;

        let path = match &self.vault_path {
            Some(path) => path.clone(),
            None => locate_vault(&self.search_root()?)?,
        };

        let records = VaultRecords::from_path(&path)?;
        let entries = parse_key_material(material)?;
        let payload = decrypt_vault(&entries, &records)?;
        let pairs = payload.pairs()?;

        Ok(Resolved {
            mode: LoadMode::Vault,
            source: Some(path),
            lookup_id: Some(payload.lookup_id().to_string()),
            pairs,
            override_existing: true,
        })
    }

    fn resolve_plain(&self) -> Result<Resolved, VaultError> {
        let path = match &self.dotenv_path {
            Some(path) => Some(path.clone()),
            None => locate_file(ENV_FILE, &self.search_root()?),
        };

        let Some(path) = path else {
            tracing::debug!("no {} file found", ENV_FILE);
            return Ok(Resolved::empty(LoadMode::Plain, self.override_existing));
        };

        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!(path = %path.display(), "dotenv file does not exist");
                return Ok(Resolved::empty(LoadMode::Plain, self.override_existing));
            }
            Err(e) => return Err(VaultError::from_dotenv(e)),
        };

        let pairs = iter
            .map(|item| item.map_err(VaultError::from_dotenv))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Resolved {
            mode: LoadMode::Plain,
            source: Some(path),
            lookup_id: None,
            pairs,
            override_existing: self.override_existing,
        })
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound
        )
    }
}
