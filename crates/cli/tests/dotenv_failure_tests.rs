//! Integration tests for plain `.env` failure handling in the CLI.
//!
//! Responsibilities:
//! - Prove that an invalid `.env` stops `run` before the child is spawned.
//! - Prove that error messages do not leak secrets from the `.env` file.
//! - Ensure DOTENV_DISABLED=1 lets `run` skip a malformed `.env`.
//!
//! Invariants:
//! - Tests must explicitly clear `DOTENV_DISABLED` to enable dotenv loading.
//! - Tests use temp directories and set current_dir to isolate `.env` file effects.

#![cfg(unix)]

mod common;

use common::vault_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_invalid_dotenv_causes_run_failure() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    let mut cmd = vault_cmd();
    cmd.current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .args(["run", "--", "sh", "-c", "echo spawned"])
        .assert()
        .code(6)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(".env"));
}

#[test]
fn test_invalid_dotenv_does_not_leak_secrets() {
    let temp_dir = TempDir::new().unwrap();
    let secret_value = "supersecret_cli_token_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("API_TOKEN={}\nINVALID_LINE", secret_value),
    )
    .unwrap();

    let mut cmd = vault_cmd();
    let output = cmd
        .current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .args(["-vv", "run", "--", "true"])
        .output()
        .expect("Failed to run command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains(secret_value),
        "Error message should NOT contain the secret value. stderr: {}",
        stderr
    );
    assert!(
        stderr.contains("DOTENV_DISABLED"),
        "Error message should hint about DOTENV_DISABLED. stderr: {}",
        stderr
    );
}

#[test]
fn test_dotenv_disabled_skips_invalid_env_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    let mut cmd = vault_cmd();
    cmd.current_dir(temp_dir.path())
        .env("DOTENV_DISABLED", "1")
        .args(["run", "--", "sh", "-c", "echo spawned"])
        .assert()
        .success()
        .stdout("spawned\n");
}
