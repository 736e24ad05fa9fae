//! Raw `.env.vault` contents.
//!
//! The vault file uses plain dotenv syntax, so it is read with `dotenvy`
//! without touching the process environment.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::VaultError;

/// Ciphertext entries of a vault file, keyed by lookup identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultRecords {
    entries: BTreeMap<String, String>,
}

impl VaultRecords {
    /// Parse vault records from any reader holding dotenv-formatted text.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, VaultError> {
        let mut entries = BTreeMap::new();
        for item in dotenvy::from_read_iter(reader) {
            let (key, value) = item.map_err(|e| match e {
                dotenvy::Error::LineParse(_, idx) => VaultError::VaultParse { error_index: idx },
                dotenvy::Error::Io(io_err) => VaultError::DotenvIo {
                    kind: io_err.kind(),
                },
                _ => VaultError::DotenvUnknown,
            })?;
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }

    /// Read and parse a vault file.
    pub fn from_path(path: &Path) -> Result<Self, VaultError> {
        tracing::debug!(path = %path.display(), "reading vault file");

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VaultError::VaultFileNotFound {
                filename: path.display().to_string(),
                search_root: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            },
            kind => VaultError::Io {
                path: PathBuf::from(path),
                kind,
            },
        })?;

        let records = Self::from_reader(file)?;
        tracing::debug!(entries = records.len(), "vault file loaded");
        Ok(records)
    }

    /// Ciphertext stored under `lookup_id`. Empty values count as absent.
    pub fn ciphertext(&self, lookup_id: &str) -> Option<&str> {
        self.entries
            .get(lookup_id)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VaultRecords {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
