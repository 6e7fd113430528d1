//! Phase review hook.
//!
//! Refuses edits to phase N of a gated document until phases 1..N-1 are
//! approved.

use chrono::Utc;
use spec_hooks_core::{HookOutcome, HookPayload};
use spec_hooks_review::{EditHint, GateDecision, PhaseGate};

use crate::config_resolver::ConfigSource;
use crate::settings::Settings;

/// Runs the phase review hook. Returns 1 when the edit is refused.
pub fn run(source: ConfigSource, edit_line: Option<usize>) -> i32 {
    super::hook::run(source, |settings, payload| evaluate(settings, payload, edit_line))
}

/// Decides the outcome for one payload.
pub fn evaluate(
    settings: &Settings,
    payload: &HookPayload,
    edit_line: Option<usize>,
) -> HookOutcome {
    let Some(target) = payload.target() else {
        tracing::debug!("payload has no file path or content");
        return HookOutcome::Pass;
    };

    let gate = match PhaseGate::new(&settings.review) {
        Ok(gate) => gate,
        Err(e) => {
            tracing::warn!("review config unusable, passing edit through: {e}");
            return HookOutcome::Pass;
        }
    };

    let hint = edit_line.map(EditHint::Line).or_else(|| {
        payload
            .edit_snippet()
            .and_then(|snippet| unique_offset(target.content, snippet))
            .map(EditHint::Offset)
    });

    match gate.evaluate(target.file_path, target.content, hint) {
        GateDecision::Allow { .. } => HookOutcome::Pass,
        GateDecision::Deny(blocked) => HookOutcome::Deny(blocked.message(Utc::now())),
    }
}

/// Offset of `snippet` in `content`, only when it occurs exactly once.
///
/// A repeated snippet cannot say which phase is being edited, so the gate
/// falls back to the highest-numbered phase.
fn unique_offset(content: &str, snippet: &str) -> Option<usize> {
    let mut matches = content.match_indices(snippet).map(|(offset, _)| offset);
    let first = matches.next()?;
    if matches.next().is_some() {
        tracing::debug!("edit snippet occurs more than once, ignoring it as a hint");
        return None;
    }
    Some(first)
}
