//! # spec-hooks-core
//!
//! Shared plumbing for editor-integration guard hooks.
//!
//! Every hook is a single-shot filter: it buffers one JSON payload from
//! standard input, classifies the edited file, then either forwards the
//! payload unchanged or refuses the edit. This crate provides:
//!
//! - [`HookPayload`] for fail-open payload decoding
//! - [`HookOutcome`] for the stdout/stderr/exit-code contract
//! - [`LineIndex`] and [`Location`] for mapping byte offsets to lines
//!
//! ## Example
//!
//! ```ignore
//! use spec_hooks_core::{HookOutcome, HookPayload};
//!
//! let payload = HookPayload::read_from(std::io::stdin().lock())?;
//! let outcome = match payload.target() {
//!     Some(target) => my_check(target.file_path, target.content),
//!     None => HookOutcome::Pass,
//! };
//! let code = outcome.emit(&payload, &mut std::io::stdout(), &mut std::io::stderr())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod location;
mod outcome;
mod payload;

pub use location::{LineIndex, Location};
pub use outcome::{HookOutcome, DENY_EXIT_CODE};
pub use payload::{EditTarget, HookPayload, PayloadError};
