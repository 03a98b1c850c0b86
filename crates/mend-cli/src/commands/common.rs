//! Output helpers shared by commands

use anyhow::{Context, Result};
use mend_core::{BestEffort, MigrationAttempt};
use serde::Serialize;
use std::io::Write;

/// Print `value` as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    write_json(&mut std::io::stdout().lock(), value)
}

/// Write `value` as pretty JSON followed by a newline
pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(out, "{json}").context("Failed to write output")?;
    out.flush().context("Failed to write output")
}

/// Render a best-effort outcome for the text output
pub(crate) fn describe_best_effort<T>(outcome: &BestEffort<T>) -> String {
    match outcome.error() {
        None => "ok".to_string(),
        Some(error) => format!("failed (ignored): {error}"),
    }
}

/// Print one migration attempt, including the stderr tail on failure
pub(crate) fn print_attempt(label: &str, attempt: &MigrationAttempt) {
    let status = if attempt.succeeded() { "ok" } else { "FAILED" };
    println!(
        "  {label}: {status} (exit {}, {:.1}s)",
        attempt.exit_code,
        attempt.duration.as_secs_f64()
    );
    if !attempt.succeeded() && !attempt.stderr_tail.is_empty() {
        for line in attempt.stderr_tail.lines() {
            println!("    | {line}");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Writer whose reader has gone away
    pub(crate) struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"exit_code": 3})).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"exit_code\": 3"));
    }

    #[test]
    fn test_write_json_reports_closed_pipe() {
        let err = write_json(&mut ClosedPipe, &serde_json::json!({})).unwrap_err();
        assert!(err.to_string().contains("Failed to write output"));
    }

    #[test]
    fn test_describe_best_effort() {
        let done: BestEffort<()> = BestEffort::Done { value: () };
        assert_eq!(describe_best_effort(&done), "ok");

        let failed: BestEffort<()> = BestEffort::Failed {
            step: "drop_view".to_string(),
            error: "HTTP 500".to_string(),
        };
        assert_eq!(describe_best_effort(&failed), "failed (ignored): HTTP 500");
    }
}
