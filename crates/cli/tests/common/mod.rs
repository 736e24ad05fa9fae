//! Shared test utilities for dotenv-vault integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that ignores the host's `.env` and `DOTENV_KEY`.
//! - Provide vault fixtures and the credentials that open them.
//!
//! Invariants / Assumptions:
//! - All integration tests using `vault_cmd()` are hermetic by default.
//! - Tests that exercise plain `.env` loading must remove `DOTENV_DISABLED` explicitly.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Credential for the `development` entry of `DEVELOPMENT_VAULT`.
pub const DEVELOPMENT_KEY: &str = "dotenv://:key_0dec82bea24ada79a983dcc11b431e28838eae59a07a8f983247c7ca9027a925@dotenv.local/vault/.env.vault?environment=development";

/// A vault with one `development` entry holding `HELLO=world`.
pub const DEVELOPMENT_VAULT: &str = r#"# .env.vault (generated with npx dotenv-vault local build)
DOTENV_VAULT_DEVELOPMENT="H2A2wOUZU+bjKH3kTpeua9iIhtK/q7/VpAn+LLVNnms+CtQ/cwXqiw=="
"#;

/// Credential for the `production` entry of `MULTI_VAULT`.
pub const PRODUCTION_KEY: &str = "dotenv://:key_7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a7a@dotenv.local/vault/.env.vault?environment=production";

/// Credential for the `ci` entry of `MULTI_VAULT`.
pub const CI_KEY: &str = "dotenv://:key_3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c3c@dotenv.local/vault/.env.vault?environment=ci";

/// Well-formed production credential whose key opens nothing.
pub const STALE_PRODUCTION_KEY: &str = "dotenv://:key_0000000000000000000000000000000000000000000000000000000000000000@dotenv.local/vault/.env.vault?environment=production";

/// A vault with `ci` and `production` entries.
///
/// production: `DATABASE_URL="postgres://db.internal/app"`, `FEATURE_FLAGS=search,billing`
/// ci: `CI=true`, `DATABASE_URL="postgres://localhost/test"`
pub const MULTI_VAULT: &str = r#"# multi-environment vault
DOTENV_VAULT_CI="DA0ODxAREhMUFRYXqewrwjdtIwjsQhnttp6JiYS9D/qX9p34t/UIPRQjwEzVfiWLGTjDXbVYyoWT4PK5nOUSRHnfbv7r2XvrMUB2reQ="
DOTENV_VAULT_PRODUCTION="AAECAwQFBgcICQoL1/kmf8B5RQXspGGm4o9rU84KHnB3ReTP5j0x7cGLvQbpTG/OB9sQ4WYOATqjZk7DHbD0GJ2D9ZM4bD3j1qgBKfZv309vNV0Tv1JwRTw+E881wojEkTqZN2QOoyVwDcPg6VDe5A=="
"#;

/// Returns a hermetic `dotenv-vault` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `DOTENV_KEY` and `RUST_LOG` from the host are cleared.
pub fn vault_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotenv-vault");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("DOTENV_KEY").env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command running in `dir` with `DOTENV_KEY` set.
pub fn vault_cmd_with_key(dir: &Path, key: &str) -> Command {
    let mut cmd = vault_cmd();
    cmd.current_dir(dir).env("DOTENV_KEY", key);
    cmd
}

/// Write `contents` to `dir/.env.vault`.
pub fn write_vault(dir: &Path, contents: &str) {
    fs::write(dir.join(".env.vault"), contents).unwrap();
}
