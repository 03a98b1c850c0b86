//! Error types for mend-exec

use thiserror::Error;

/// Errors raised before a child process produces an exit status
#[derive(Error, Debug)]
pub enum ExecError {
    /// X001: No program configured
    #[error("[X001] Migration command is empty")]
    EmptyCommand,

    /// X002: The child could not be started
    #[error("[X002] Failed to start '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    /// X003: Waiting on the child failed
    #[error("[X003] Failed to collect output of '{program}': {source}")]
    WaitFailed {
        program: String,
        source: std::io::Error,
    },
}

/// Result type alias for ExecError
pub type ExecResult<T> = Result<T, ExecError>;
