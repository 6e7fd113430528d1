//! Hook outcomes and the exit-code contract.

use std::io::Write;

/// Exit code for a refused edit.
pub const DENY_EXIT_CODE: i32 = 1;

/// What a hook decided about one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Forward the payload, say nothing.
    Pass,
    /// Forward the payload and print an advisory on the side channel.
    Advise(String),
    /// Refuse the edit: print the message, forward nothing.
    Deny(String),
}

impl HookOutcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Pass | Self::Advise(_) => 0,
            Self::Deny(_) => DENY_EXIT_CODE,
        }
    }

    /// Writes the outcome to the given streams and returns the exit code.
    ///
    /// # Errors
    ///
    /// Returns error if writing to either stream fails.
    pub fn emit(
        &self,
        payload: &crate::HookPayload,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
    ) -> std::io::Result<i32> {
        match self {
            Self::Pass => {
                stdout.write_all(payload.passthrough())?;
            }
            Self::Advise(message) => {
                writeln!(stderr, "{message}")?;
                stdout.write_all(payload.passthrough())?;
            }
            Self::Deny(message) => {
                writeln!(stderr, "{message}")?;
            }
        }
        stdout.flush()?;
        stderr.flush()?;
        Ok(self.exit_code())
    }
}
