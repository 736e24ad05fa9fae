//! Centralized constants for the dotenv-vault workspace.
//!
//! File names, environment variable names, and the fixed sizes of the vault
//! cipher live here so the parser, decryptor, and CLI agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable carrying the comma-separated key-material string.
///
/// Its presence selects vault mode.
pub const DOTENV_KEY_VAR: &str = "DOTENV_KEY";

/// Environment variable that disables plain `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// File Names
// =============================================================================

/// Plain environment file name.
pub const ENV_FILE: &str = ".env";

/// Encrypted vault file name.
pub const VAULT_FILE: &str = ".env.vault";

// =============================================================================
// Vault Format
// =============================================================================

/// Prefix of every ciphertext entry in the vault file.
pub const VAULT_ENTRY_PREFIX: &str = "DOTENV_VAULT_";

/// Query parameter of a credential URI naming the target environment.
pub const ENVIRONMENT_PARAM: &str = "environment";

/// Number of hex characters of key material at the end of a credential.
pub const KEY_HEX_LENGTH: usize = 64;

/// Size of the decoded AES-256 key in bytes.
pub const KEY_BYTES: usize = 32;

/// Size of the AES-GCM nonce prepended to every ciphertext.
pub const NONCE_BYTES: usize = 12;

/// Size of the AES-GCM authentication tag appended to every ciphertext.
pub const TAG_BYTES: usize = 16;
