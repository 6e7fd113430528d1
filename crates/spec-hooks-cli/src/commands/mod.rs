//! Subcommand implementations.

pub mod architecture;
pub mod check;
pub mod hook;
pub mod init;
pub mod list_rules;
pub mod output;
pub mod phase_review;
