//! Run a command with resolved variables.
//!
//! Responsibilities:
//! - Resolve variables from `.env.vault` (when a key is given) or `.env`.
//! - Spawn the command with those variables and pass its exit status through.
//!
//! Does NOT handle:
//! - Modifying this process's own environment; only the child sees the variables.
//!
//! Invariants:
//! - Vault values replace inherited variables; plain `.env` values do so
//!   unless `--no-override` is given.
//! - Resolution errors stop the command from being spawned at all.

use anyhow::{Context, Result};
use std::process::{Command, ExitStatus};

use super::VaultSource;
use crate::error::ExitCode;

pub fn run(source: &VaultSource, command: &[String], no_override: bool) -> Result<i32> {
    let resolved = source.loader().with_override(!no_override).resolve()?;

    let (program, args) = command.split_first().context("no command given")?;

    let mut child = Command::new(program);
    child.args(args);

    let mut injected = 0usize;
    for (key, value) in resolved.pairs() {
        if resolved.override_existing() || std::env::var_os(key).is_none() {
            child.env(key, value);
            injected += 1;
        }
    }

    tracing::info!(
        mode = %resolved.mode(),
        injected,
        program = %program,
        "spawning command"
    );

    let status = child
        .status()
        .with_context(|| format!("failed to run `{}`", program))?;

    Ok(exit_status_code(status))
}

/// Exit code to report for a finished child.
///
/// On Unix, a child killed by a signal reports 128 + signal number.
fn exit_status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ExitCode::GeneralError.as_i32()
}
