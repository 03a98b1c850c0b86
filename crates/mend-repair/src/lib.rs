//! mend-repair - Migration repair sequencer for Mend
//!
//! Drives the migration tool to completion: wait for the store, migrate,
//! and on failure apply the fixed correction before one final attempt.

pub mod error;
pub mod notify;
pub mod sequencer;

pub use error::NotifyError;
pub use notify::WebhookNotifier;
pub use sequencer::Sequencer;
