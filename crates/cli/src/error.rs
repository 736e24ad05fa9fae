//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map VaultError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Exit codes of commands launched by `run` (passed through unchanged).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.

use dotenv_vault::VaultError;

/// Structured exit codes for dotenv-vault.
///
/// These codes let deploy scripts tell a bad `DOTENV_KEY` apart from a
/// vault that was never built for the target environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Credential error - `DOTENV_KEY` is missing or malformed.
    ///
    /// Scripts should fix the key material; retrying will not help.
    CredentialError = 2,

    /// Vault not found - no `.env.vault` at the given path or above the search root.
    VaultNotFound = 3,

    /// Environment not in vault - the vault has no entry for a requested environment.
    ///
    /// Scripts should rebuild the vault to include the environment.
    EnvironmentNotInVault = 4,

    /// Decryption failed - no key authenticated, or the plaintext is not UTF-8.
    DecryptionFailed = 5,

    /// Parse error - the vault, the decrypted payload, or `.env` has invalid syntax.
    ParseError = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&VaultError> for ExitCode {
    fn from(err: &VaultError) -> Self {
        match err {
            VaultError::MissingKeyMaterial
            | VaultError::InvalidKeyFormat { .. }
            | VaultError::KeyTooShort { .. }
            | VaultError::MissingEnvironmentLabel { .. } => ExitCode::CredentialError,

            VaultError::VaultFileNotFound { .. } => ExitCode::VaultNotFound,

            VaultError::EnvironmentNotInVault { .. } => ExitCode::EnvironmentNotInVault,

            VaultError::AllKeysInvalid { .. } | VaultError::InvalidPlaintextEncoding => {
                ExitCode::DecryptionFailed
            }

            VaultError::VaultParse { .. }
            | VaultError::PlaintextParse { .. }
            | VaultError::DotenvParse { .. } => ExitCode::ParseError,

            VaultError::DotenvIo { .. } | VaultError::DotenvUnknown | VaultError::Io { .. } => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no VaultError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<VaultError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
