//! Shared stdin/stdout plumbing for the hook subcommands.
//!
//! Hooks fail open: an unreadable payload or an unusable configuration
//! lets the edit through untouched.

use spec_hooks_core::{HookOutcome, HookPayload};
use std::io;

use crate::config_resolver::ConfigSource;
use crate::settings::Settings;

/// Buffers the whole payload from stdin.
fn read_payload() -> HookPayload {
    HookPayload::read_from(io::stdin().lock()).unwrap_or_else(|e| {
        tracing::warn!("{e}");
        HookPayload::parse(Vec::new())
    })
}

/// Forwards the payload untouched without evaluating it.
///
/// Used when the hook cannot even start, e.g. on unusable arguments.
pub fn pass_through() -> i32 {
    let payload = read_payload();
    emit(&HookOutcome::Pass, &payload)
}

/// Runs `evaluate` against the payload and writes the outcome.
///
/// Returns the process exit code.
pub fn run<F>(source: ConfigSource, evaluate: F) -> i32
where
    F: FnOnce(&Settings, &HookPayload) -> HookOutcome,
{
    let payload = read_payload();

    let outcome = match Settings::load(source) {
        Ok(settings) => evaluate(&settings, &payload),
        Err(e) => {
            tracing::warn!("configuration unusable, passing edit through: {e:#}");
            HookOutcome::Pass
        }
    };

    emit(&outcome, &payload)
}

fn emit(outcome: &HookOutcome, payload: &HookPayload) -> i32 {
    match outcome.emit(payload, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!("failed to write hook output: {e}");
            outcome.exit_code()
        }
    }
}
