//! mend-core - Core library for Mend
//!
//! This crate provides the configuration model, the fixed correction plan,
//! the best-effort outcome type and the run report shared by the other
//! Mend crates.

pub mod config;
pub mod correction;
pub mod error;
pub mod outcome;
pub mod report;
pub(crate) mod serde_helpers;

pub use config::{MigrationConfig, NotifyConfig, ReadinessConfig, RepairConfig, StoreConfig};
pub use correction::{CorrectionPlan, CorrectiveStatement};
pub use error::{CoreError, CoreResult};
pub use outcome::BestEffort;
pub use report::{CorrectionReport, MigrationAttempt, Readiness, RepairReport};
