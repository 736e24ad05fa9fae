//! Process environment access.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Apply resolved `(key, value)` pairs to the process environment.
//!
//! Does NOT handle:
//! - Parsing dotenv syntax (delegated to `dotenvy`).
//! - Deciding between plain and vault mode (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Pairs are applied in order, so a later duplicate key wins.

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Write `pairs` into the process environment.
///
/// With `override_existing`, every pair is written. Without it, variables
/// that were already set before this call are left alone. Returns the number
/// of variables written.
///
/// Call this during single-threaded startup, before other threads read the
/// environment.
pub fn apply_to_process_environment(pairs: &[(String, String)], override_existing: bool) -> usize {
    let preexisting: Vec<bool> = pairs
        .iter()
        .map(|(key, _)| std::env::var_os(key).is_some())
        .collect();

    let mut applied = 0;
    for ((key, value), existed) in pairs.iter().zip(preexisting) {
        if existed && !override_existing {
            tracing::debug!(key = %key, "keeping existing environment variable");
            continue;
        }
        // SAFETY: environment mutation happens once at startup, before the
        // caller spawns threads that read the environment.
        unsafe {
            std::env::set_var(key, value);
        }
        applied += 1;
    }

    tracing::debug!(applied, total = pairs.len(), "applied environment variables");
    applied
}
