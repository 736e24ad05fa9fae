//! Vault check command.
//!
//! Responsibilities:
//! - Report, per credential in `DOTENV_KEY`, its target environment and whether
//!   the vault has an entry for it.
//! - Attempt the rotation decrypt and report which credential opened the vault.
//!
//! Does NOT handle:
//! - Printing decrypted values (see `decrypt`).
//!
//! Invariants:
//! - Output never contains key material or plaintext values, only labels,
//!   lookup identifiers, positions, and counts.
//! - The report is printed even when decryption fails; the error is returned
//!   afterwards so the exit code still reflects the failure.

use anyhow::Result;
use dotenv_vault::decrypt_vault;
use serde::Serialize;

use super::{OpenedVault, VaultSource};

#[derive(Debug, Serialize)]
struct CheckReport {
    vault: String,
    vault_entries: usize,
    credentials: Vec<CredentialStatus>,
    opened_by: Option<usize>,
    variables: Option<usize>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CredentialStatus {
    position: usize,
    environment: String,
    lookup_id: String,
    in_vault: bool,
}

pub fn run(source: &VaultSource, json: bool) -> Result<()> {
    let opened = source.open()?;
    let (report, outcome) = build_report(&opened);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    outcome.map_err(Into::into)
}

fn build_report(opened: &OpenedVault) -> (CheckReport, Result<(), dotenv_vault::VaultError>) {
    let credentials = opened
        .entries
        .iter()
        .map(|entry| CredentialStatus {
            position: entry.position(),
            environment: entry.target_label().to_string(),
            lookup_id: entry.lookup_id().to_string(),
            in_vault: opened.records.ciphertext(entry.lookup_id()).is_some(),
        })
        .collect();

    let decrypted = decrypt_vault(&opened.entries, &opened.records)
        .and_then(|payload| payload.pairs().map(|pairs| (payload.position(), pairs.len())));

    let (opened_by, variables, outcome) = match decrypted {
        Ok((position, count)) => (Some(position), Some(count), Ok(())),
        Err(e) => (None, None, Err(e)),
    };

    let report = CheckReport {
        vault: opened.path.display().to_string(),
        vault_entries: opened.records.len(),
        credentials,
        opened_by,
        variables,
        error: outcome.as_ref().err().map(ToString::to_string),
    };
    (report, outcome)
}

fn print_table(report: &CheckReport) {
    println!("Vault: {} ({} entries)", report.vault, report.vault_entries);

    let label_width = report
        .credentials
        .iter()
        .map(|c| c.environment.len())
        .max()
        .unwrap_or(0);
    let id_width = report
        .credentials
        .iter()
        .map(|c| c.lookup_id.len())
        .max()
        .unwrap_or(0);

    for credential in &report.credentials {
        println!(
            "  [{}] {:<label_width$}  {:<id_width$}  {}",
            credential.position,
            credential.environment,
            credential.lookup_id,
            if credential.in_vault { "present" } else { "missing" },
        );
    }

    match (report.opened_by, report.variables) {
        (Some(position), Some(count)) => {
            println!("Opened by key {} ({} variables)", position, count)
        }
        _ => println!("Not opened"),
    }
}
