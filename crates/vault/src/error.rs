//! Error types for vault and dotenv loading.
//!
//! Responsibilities:
//! - Define error variants for credential parsing, vault lookup, and decryption.
//! - Map `dotenvy` failures onto variants that carry no file contents.
//!
//! Does NOT handle:
//! - Per-candidate decryption failures (see `DecryptError` in `vault::cipher`),
//!   which are folded into `AllKeysInvalid` by the rotation loop.
//!
//! Invariants:
//! - No variant carries key material or decrypted values. Credential errors
//!   identify the offending segment by its position in `DOTENV_KEY`.
//! - Dotenv errors NEVER include raw line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::KEY_HEX_LENGTH;

/// Errors that can occur while loading plain or encrypted environment files.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VaultError {
    #[error("NOT_FOUND_DOTENV_KEY: cannot find DOTENV_KEY in the environment")]
    MissingKeyMaterial,

    #[error(
        "NOT_FOUND_DOTENV_VAULT: cannot locate {filename} from {search_root}. Hint: did you forget to build it?"
    )]
    VaultFileNotFound {
        filename: String,
        search_root: PathBuf,
    },

    #[error(
        "INVALID_DOTENV_KEY: segment {position} is not a URI with a key in its password component"
    )]
    InvalidKeyFormat { position: usize },

    #[error(
        "INVALID_DOTENV_KEY: segment {position} key part must be {} characters long (or more)",
        KEY_HEX_LENGTH
    )]
    KeyTooShort { position: usize },

    #[error("INVALID_DOTENV_KEY: segment {position} is missing the environment part")]
    MissingEnvironmentLabel { position: usize },

    #[error(
        "NOT_FOUND_DOTENV_ENVIRONMENT: cannot locate environment {lookup_id} in your .env.vault file. Hint: rebuild the vault to include it"
    )]
    EnvironmentNotInVault { lookup_id: String },

    #[error("INVALID_DOTENV_KEY: none of the {attempts} key(s) could decrypt the vault")]
    AllKeysInvalid { attempts: usize },

    #[error("decrypted vault payload is not valid UTF-8")]
    InvalidPlaintextEncoding,

    /// The vault file has invalid dotenv syntax.
    ///
    /// SAFETY: Only the byte index is reported, never the offending line.
    #[error("Failed to parse .env.vault file at position {error_index}")]
    VaultParse { error_index: usize },

    /// The decrypted payload has invalid dotenv syntax.
    ///
    /// SAFETY: Only the byte index is reported, never the offending line.
    #[error("Failed to parse decrypted vault payload at position {error_index}")]
    PlaintextParse { error_index: usize },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    #[error("Failed to read {path}: {kind}")]
    Io { path: PathBuf, kind: ErrorKind },
}

impl VaultError {
    /// Map a dotenvy error raised while reading a plain `.env` file.
    pub(crate) fn from_dotenv(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, idx) => Self::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => Self::DotenvIo {
                kind: io_err.kind(),
            },
            _ => Self::DotenvUnknown,
        }
    }
}
