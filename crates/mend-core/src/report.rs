//! Run report for a repair sequence.
//!
//! The report is built up step by step by the sequencer and printed as JSON
//! by `mend --json`. Its exit code is always the exit code of the last
//! migration invocation.

use crate::outcome::BestEffort;
use crate::serde_helpers::duration_as_millis;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Result of the bounded readiness poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Readiness {
    /// Whether a probe succeeded within the budget
    pub ready: bool,
    /// Number of probes issued
    pub attempts: u32,
}

/// One invocation of the migration tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationAttempt {
    /// Child exit code (see `mend_exec::ProcessOutput` for signal/spawn mapping)
    pub exit_code: i32,
    /// Wall-clock duration
    #[serde(rename = "duration_ms", serialize_with = "duration_as_millis")]
    pub duration: Duration,
    /// Last lines of stderr, for diagnostics
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr_tail: String,
}

impl MigrationAttempt {
    /// Zero exit status
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Outcome of the two corrective statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionReport {
    pub drop_view: BestEffort<()>,
    pub create_view: BestEffort<()>,
}

impl CorrectionReport {
    /// Both statements completed
    pub fn fully_applied(&self) -> bool {
        self.drop_view.is_done() && self.create_view.is_done()
    }
}

/// Everything that happened during one repair run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    pub started_at: DateTime<Utc>,
    /// `None` when the readiness poll was skipped
    pub readiness: Option<Readiness>,
    pub first_attempt: MigrationAttempt,
    /// `None` when the first attempt succeeded
    pub precondition_met: Option<bool>,
    /// `None` unless the precondition was met
    pub correction: Option<CorrectionReport>,
    /// `None` when the first attempt succeeded
    pub second_attempt: Option<MigrationAttempt>,
}

impl RepairReport {
    /// The authoritative migration attempt
    pub fn final_attempt(&self) -> &MigrationAttempt {
        self.second_attempt.as_ref().unwrap_or(&self.first_attempt)
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        self.final_attempt().exit_code
    }

    /// Whether the final migration attempt succeeded
    pub fn succeeded(&self) -> bool {
        self.final_attempt().succeeded()
    }

    /// Whether corrective statements were issued
    pub fn correction_attempted(&self) -> bool {
        self.correction.is_some()
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        let path = match (&self.second_attempt, &self.correction) {
            (None, _) => "first attempt",
            (Some(_), Some(_)) => "retry after correction",
            (Some(_), None) => "retry without correction",
        };
        if self.succeeded() {
            format!("migrations succeeded ({path})")
        } else {
            format!(
                "migrations failed with exit code {} ({path})",
                self.exit_code()
            )
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
