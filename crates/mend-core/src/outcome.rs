//! Best-effort step outcomes.
//!
//! A [`BestEffort`] records the result of a step whose failure must not
//! abort the run. The error is logged once, when the outcome is captured,
//! and then carried as data so callers and reports can still see it.

use serde::Serialize;
use std::fmt::Display;

/// Outcome of a step whose failure is intentionally non-fatal
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BestEffort<T> {
    /// The step completed
    Done {
        #[serde(skip)]
        value: T,
    },
    /// The step failed; the error was logged and swallowed
    Failed { step: String, error: String },
}

impl<T> BestEffort<T> {
    /// Capture `result`, logging a warning if it is an error.
    pub fn capture<E: Display>(step: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => BestEffort::Done { value },
            Err(e) => {
                log::warn!("{step} failed (continuing): {e}");
                BestEffort::Failed {
                    step: step.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// Whether the step completed
    pub fn is_done(&self) -> bool {
        matches!(self, BestEffort::Done { .. })
    }

    /// The swallowed error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            BestEffort::Done { .. } => None,
            BestEffort::Failed { error, .. } => Some(error),
        }
    }

    /// Discard the error and keep the value, if any
    pub fn ok(self) -> Option<T> {
        match self {
            BestEffort::Done { value } => Some(value),
            BestEffort::Failed { .. } => None,
        }
    }

    /// Value of a completed step, or `fallback` if it failed
    pub fn unwrap_or(self, fallback: T) -> T {
        self.ok().unwrap_or(fallback)
    }
}
