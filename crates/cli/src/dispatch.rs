//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Capture the global vault options before the subcommand is consumed.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping for errors (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands::{self, VaultSource};
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the process exit code on success: `ExitCode::Success` for
/// everything except `run`, which reports the child's own status.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    let source = VaultSource::from_cli(&cli);

    match cli.command {
        Commands::Check { json } => commands::check::run(&source, json)?,
        Commands::Decrypt => commands::decrypt::run(&source)?,
        Commands::Run {
            no_override,
            command,
        } => return commands::run::run(&source, &command, no_override),
        Commands::Completions { shell } => commands::completions::run(shell)?,
    }

    Ok(ExitCode::Success.as_i32())
}
