//! Error types for mend-repair

use thiserror::Error;

/// Outcome notification errors
#[derive(Error, Debug)]
pub enum NotifyError {
    /// N001: The webhook could not be reached
    #[error("[N001] Webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// N002: The webhook answered with a non-success status
    #[error("[N002] Webhook rejected notification with HTTP {status}")]
    Rejected { status: u16 },
}
