//! Migration runner trait definition

use crate::output::ProcessOutput;
use async_trait::async_trait;

/// Invokes the external migration tool
///
/// A runner never fails: problems starting the tool are folded into the
/// returned [`ProcessOutput`] as a non-zero exit code, so callers treat
/// them like any other failed invocation.
#[async_trait]
pub trait MigrationRunner: Send + Sync {
    /// Run the tool once, with the forcing flag when `force` is set
    async fn run(&self, force: bool) -> ProcessOutput;

    /// Human-readable command line of one run, for logs
    fn describe(&self, force: bool) -> String;
}
