//! dotenv-vault - Command-line front end for `.env.vault` files.
//!
//! Responsibilities:
//! - Parse command-line arguments and `DOTENV_KEY`.
//! - Install the tracing subscriber (stderr only, so stdout stays pipeable).
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Credential parsing, decryption, or file discovery (see `crates/vault`).
//!
//! Invariants:
//! - Key material and decrypted values are never written to stderr.
//! - `run` exits with the child's status code; every other command uses `ExitCode`.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
