//! Architecture layer hook.
//!
//! Advisory only: violations are reported on stderr and the payload is
//! always forwarded.

use spec_hooks_arch::ArchRuleEngine;
use spec_hooks_core::{HookOutcome, HookPayload};

use crate::config_resolver::ConfigSource;
use crate::settings::Settings;

/// Runs the architecture hook. Always returns exit code 0.
pub fn run(source: ConfigSource) -> i32 {
    super::hook::run(source, evaluate)
}

/// Decides the outcome for one payload.
pub fn evaluate(settings: &Settings, payload: &HookPayload) -> HookOutcome {
    let Some(target) = payload.target() else {
        tracing::debug!("payload has no file path or content");
        return HookOutcome::Pass;
    };

    let engine = ArchRuleEngine::new(settings.architecture.clone());
    match engine
        .check(target.file_path, target.content)
        .and_then(|report| report.advisory())
    {
        Some(advisory) => HookOutcome::Advise(advisory),
        None => HookOutcome::Pass,
    }
}
