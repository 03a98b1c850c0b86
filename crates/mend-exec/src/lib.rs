//! mend-exec - Process invocation layer for Mend
//!
//! This crate provides the `MigrationRunner` trait and `ProcessRunner`, which
//! runs the external migration tool as a child process and captures its exit
//! status and output as a structured [`ProcessOutput`].

pub mod error;
pub mod output;
pub mod process;
pub mod traits;

pub use error::{ExecError, ExecResult};
pub use output::{ProcessOutput, EXIT_SPAWN_FAILED};
pub use process::ProcessRunner;
pub use traits::MigrationRunner;
