//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read `DOTENV_KEY` through clap so `--key` and the environment share one path.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not parse or validate key material (see `dotenv_vault::credential`).

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotenv-vault")]
#[command(about = "Decrypt .env.vault files with DOTENV_KEY, with key rotation", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dotenv-vault check\n  dotenv-vault --vault-path deploy/.env.vault check --json\n  DOTENV_KEY=\"$NEW_KEY,$OLD_KEY\" dotenv-vault run -- ./server\n  dotenv-vault decrypt > .env.production\n"
)]
pub struct Cli {
    /// Key material: one or more comma-separated dotenv:// credentials
    #[arg(
        long,
        global = true,
        env = "DOTENV_KEY",
        hide_env_values = true,
        value_name = "MATERIAL"
    )]
    pub key: Option<String>,

    /// Path to the vault file (skips searching for .env.vault)
    #[arg(long, global = true, value_name = "FILE")]
    pub vault_path: Option<PathBuf>,

    /// Directory to start searching for .env / .env.vault from
    #[arg(long, global = true, value_name = "DIR")]
    pub search_root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate DOTENV_KEY against the vault without printing any values
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the decrypted vault payload to stdout
    Decrypt,

    /// Run a command with the resolved variables in its environment
    Run {
        /// Keep variables that are already set (plain .env mode only)
        #[arg(long)]
        no_override: bool,

        /// The command to run and its arguments
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Key material from `--key` or `DOTENV_KEY`.
    ///
    /// A blank value still counts as given: commands then fail with a missing
    /// key instead of falling back to plain `.env` loading.
    pub fn key_material(&self) -> Option<String> {
        self.key.clone().or_else(|| {
            std::env::var_os("DOTENV_KEY").map(|value| value.to_string_lossy().into_owned())
        })
    }
}
