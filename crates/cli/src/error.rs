//! Process exit codes understood by the monitoring framework.
//!
//! Responsibilities:
//! - Define the exit code scale and map health severities onto it.
//!
//! Does NOT handle:
//! - Wording of failure lines (see `output`).
//!
//! Invariants:
//! - The exit code always equals the numeric severity of the printed line.

use nimble_client::Severity;

/// Structured exit codes for nimble-health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No hardware issues present.
    Ok = 0,

    /// Reserved; no current check produces it.
    Warning = 1,

    /// A hardware fault was found, or the check could not be completed.
    Critical = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<Severity> for ExitCode {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Ok => ExitCode::Ok,
            Severity::Warning => ExitCode::Warning,
            Severity::Critical => ExitCode::Critical,
        }
    }
}
