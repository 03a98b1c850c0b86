//! Structured result of one child process run

use crate::error::ExecError;
use mend_core::MigrationAttempt;
use std::process::ExitStatus;
use std::time::Duration;

/// Exit code reported when the child could not be started (shell convention)
pub const EXIT_SPAWN_FAILED: i32 = 127;

/// Exit code reported when no better code is available
const EXIT_UNKNOWN: i32 = 1;

/// Lines of stderr kept in the run report
const STDERR_TAIL_LINES: usize = 20;

/// Exit status plus captured output of a child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `128 + signal` for signal deaths, 127 for spawn failures
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl ProcessOutput {
    /// Build from a finished child's status and output
    pub fn from_status(status: ExitStatus, stdout: &[u8], stderr: &[u8], duration: Duration) -> Self {
        Self {
            exit_code: exit_code_of(status),
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
            duration,
        }
    }

    /// Build for a child that never produced an exit status
    pub fn from_error(err: &ExecError, duration: Duration) -> Self {
        let exit_code = match err {
            ExecError::EmptyCommand | ExecError::SpawnFailed { .. } => EXIT_SPAWN_FAILED,
            ExecError::WaitFailed { .. } => EXIT_UNKNOWN,
        };
        Self {
            exit_code,
            stdout: String::new(),
            stderr: err.to_string(),
            duration,
        }
    }

    /// Zero exit status
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Last `lines` lines of stderr
    pub fn stderr_tail(&self, lines: usize) -> String {
        let all: Vec<&str> = self.stderr.trim_end().lines().collect();
        let start = all.len().saturating_sub(lines);
        all[start..].join("\n")
    }
}

impl From<&ProcessOutput> for MigrationAttempt {
    fn from(output: &ProcessOutput) -> Self {
        MigrationAttempt {
            exit_code: output.exit_code,
            duration: output.duration,
            stderr_tail: output.stderr_tail(STDERR_TAIL_LINES),
        }
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => EXIT_UNKNOWN,
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(EXIT_UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_with_stderr(stderr: &str) -> ProcessOutput {
        ProcessOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: stderr.to_string(),
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_stderr_tail_keeps_last_lines() {
        let output = output_with_stderr("a\nb\nc\nd\n");
        assert_eq!(output.stderr_tail(2), "c\nd");
        assert_eq!(output.stderr_tail(10), "a\nb\nc\nd");
        assert_eq!(output_with_stderr("").stderr_tail(3), "");
    }

    #[test]
    fn test_spawn_failure_maps_to_127() {
        let err = ExecError::SpawnFailed {
            program: "missing-tool".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let output = ProcessOutput::from_error(&err, Duration::ZERO);
        assert_eq!(output.exit_code, EXIT_SPAWN_FAILED);
        assert!(!output.success());
        assert!(output.stderr.contains("missing-tool"));
    }

    #[test]
    fn test_into_migration_attempt() {
        let output = output_with_stderr("first\nDB::Exception: duplicate column\n");
        let attempt = MigrationAttempt::from(&output);
        assert_eq!(attempt.exit_code, 1);
        assert_eq!(attempt.duration, Duration::from_millis(5));
        assert!(attempt.stderr_tail.ends_with("duplicate column"));
    }
}
