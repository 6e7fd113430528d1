//! # spec-hooks-review
//!
//! Sequential review gate for phased specification documents.
//!
//! A document is split into `Phase N` sections by its headings. Each phase
//! carries a review status marker such as
//! `<!-- REVIEW STATUS: APPROVED - 2026-01-05T10:00:00Z - alice -->`.
//! Editing phase N is refused until phases 1 through N-1 are all
//! `APPROVED`.
//!
//! - [`ReviewConfig`] selects which documents are gated
//! - [`ReviewDocument`] holds the phases and their current statuses
//! - [`PhaseGate`] turns a document and an optional [`EditHint`] into a
//!   [`GateDecision`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod gate;
pub mod phase;
pub mod status;

pub use config::{ConfigError, DocumentMatcher, ReviewConfig};
pub use document::ReviewDocument;
pub use gate::{AllowReason, Blocked, EditHint, GateDecision, PhaseGate};
pub use phase::{Phase, PhaseIndex};
pub use status::{ReviewStatus, StatusMarker};
