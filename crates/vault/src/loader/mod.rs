//! Environment loader for plain and encrypted dotenv files.
//!
//! Responsibilities:
//! - Select plain or vault mode from the presence of `DOTENV_KEY`.
//! - Locate `.env` / `.env.vault` by searching upward from a start directory.
//! - Apply resolved variables to the process environment.
//!
//! Does NOT handle:
//! - Parsing `DOTENV_KEY` (see `credential`).
//! - Decrypting vault entries (see `vault`).
//!
//! Invariants / Assumptions:
//! - Vault-sourced values always override existing variables.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.

mod builder;
mod discovery;
mod env;

#[cfg(test)]
mod tests;

pub use builder::{LoadMode, LoadReport, Resolved, VaultLoader};
pub use discovery::{locate_file, locate_vault};
pub use env::{apply_to_process_environment, env_var_or_none};
