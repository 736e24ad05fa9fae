//! Environment loading from `.env` files and encrypted `.env.vault` files.
//!
//! When `DOTENV_KEY` is set, the vault is located, each comma-separated
//! credential in `DOTENV_KEY` is parsed, and the matching AES-256-GCM
//! ciphertexts are tried in order until one authenticates. The decrypted
//! plaintext is parsed as a dotenv file and applied with override. Without
//! `DOTENV_KEY`, a plain `.env` file is loaded.
//!
//! ```no_run
//! fn main() -> Result<(), dotenv_vault::VaultError> {
//!     let report = dotenv_vault::load()?;
//!     println!("loaded {} variables in {} mode", report.applied, report.mode);
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod credential;
mod error;
mod loader;
pub mod vault;

pub use credential::{CredentialEntry, lookup_id, parse_credential, parse_key_material};
pub use error::VaultError;
pub use loader::{
    LoadMode, LoadReport, Resolved, VaultLoader, apply_to_process_environment, env_var_or_none,
    locate_file, locate_vault,
};
pub use vault::{
    DecryptError, DecryptedPayload, VaultRecords, decrypt_ciphertext, decrypt_vault,
    decrypt_vault_from_env,
};

/// Load `.env` or `.env.vault` into the process environment.
///
/// Shorthand for `VaultLoader::new().from_env().load()`.
pub fn load() -> Result<LoadReport, VaultError> {
    VaultLoader::new().from_env().load()
}
