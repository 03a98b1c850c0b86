//! Migration repair sequence.
//!
//! 1. Poll the store until it answers (bounded; never fails the run).
//! 2. Run the migration tool with `--force`. Success ends the sequence.
//! 3. Check whether the precondition table exists (errors count as "no").
//! 4. If it does, drop and re-create the derived view (best-effort).
//! 5. Run the migration tool again. Its exit code is final.
//!
//! Steps 3-5 run at most once per sequence.

use chrono::Utc;
use mend_core::{
    BestEffort, CorrectionPlan, CorrectionReport, MigrationAttempt, Readiness, ReadinessConfig,
    RepairConfig, RepairReport,
};
use mend_db::Store;
use mend_exec::{MigrationRunner, ProcessOutput};
use std::sync::Arc;
use std::time::Duration;

/// Drives one repair run against a store and a migration tool
pub struct Sequencer {
    store: Arc<dyn Store>,
    runner: Arc<dyn MigrationRunner>,
    plan: CorrectionPlan,
    readiness: ReadinessConfig,
    skip_wait: bool,
}

impl Sequencer {
    /// Create a sequencer using the standard correction plan
    pub fn new(
        store: Arc<dyn Store>,
        runner: Arc<dyn MigrationRunner>,
        config: &RepairConfig,
    ) -> Self {
        Self {
            store,
            runner,
            plan: CorrectionPlan::standard(),
            readiness: config.readiness.clone(),
            skip_wait: false,
        }
    }

    /// Replace the correction plan
    pub fn with_plan(mut self, plan: CorrectionPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Skip the readiness poll in [`Sequencer::run`]
    pub fn skip_wait(mut self, skip: bool) -> Self {
        self.skip_wait = skip;
        self
    }

    /// The correction plan in use
    pub fn plan(&self) -> &CorrectionPlan {
        &self.plan
    }

    /// Probe the store with a trivial query until it answers.
    ///
    /// Sleeps `interval` between failed probes and gives up after
    /// `max_attempts`. Never sleeps after the last probe.
    pub async fn wait_for_store_ready(&self, max_attempts: u32, interval: Duration) -> Readiness {
        log::info!(
            "Waiting for {} store (up to {} attempts, {}s apart)",
            self.store.store_type(),
            max_attempts,
            interval.as_secs_f64()
        );

        for attempt in 1..=max_attempts {
            match self.store.ping().await {
                Ok(()) => {
                    log::info!("Store ready after {attempt} attempt(s)");
                    return Readiness {
                        ready: true,
                        attempts: attempt,
                    };
                }
                Err(e) => log::debug!("Store not ready (attempt {attempt}/{max_attempts}): {e}"),
            }
            if attempt < max_attempts {
                tokio::time::sleep(interval).await;
            }
        }

        log::warn!("Store not ready after {max_attempts} attempts; attempting migrations anyway");
        Readiness {
            ready: false,
            attempts: max_attempts,
        }
    }

    /// Invoke the migration tool once
    pub async fn run_migrations(&self, force: bool) -> ProcessOutput {
        log::info!("Running migrations: {}", self.runner.describe(force));
        let output = self.runner.run(force).await;
        if output.success() {
            log::info!("Migrations succeeded");
        } else {
            log::warn!("Migrations failed with exit code {}", output.exit_code);
        }
        output
    }

    /// Whether `table` exists in the current database.
    ///
    /// A failed metadata query is logged and reported as `false`.
    pub async fn check_precondition(&self, table: &str) -> bool {
        let exists =
            BestEffort::capture("check_precondition", self.store.table_exists(table).await)
                .unwrap_or(false);
        if exists {
            log::info!("Precondition table '{table}' present");
        } else {
            log::info!("Precondition table '{table}' absent; nothing to correct");
        }
        exists
    }

    /// Issue the corrective statements in order, swallowing failures.
    ///
    /// Safe to call repeatedly: the drop tolerates a missing view and the
    /// create is guarded with `IF NOT EXISTS`.
    pub async fn apply_correction(&self) -> CorrectionReport {
        log::info!("Applying correction");
        let drop_view = self
            .execute_best_effort(self.plan.drop_view.label, self.plan.drop_view.sql)
            .await;
        let create_view = self
            .execute_best_effort(self.plan.create_view.label, self.plan.create_view.sql)
            .await;
        CorrectionReport {
            drop_view,
            create_view,
        }
    }

    async fn execute_best_effort(&self, label: &str, sql: &str) -> BestEffort<()> {
        let outcome = BestEffort::capture(label, self.store.execute(sql).await);
        if outcome.is_done() {
            log::info!("{label}: ok");
        }
        outcome
    }

    /// Run the full sequence and report what happened
    pub async fn run(&self) -> RepairReport {
        let started_at = Utc::now();

        let readiness = if self.skip_wait {
            None
        } else {
            Some(
                self.wait_for_store_ready(self.readiness.max_attempts, self.readiness.interval())
                    .await,
            )
        };

        let first = self.run_migrations(true).await;
        let first_attempt = MigrationAttempt::from(&first);
        if first.success() {
            return RepairReport {
                started_at,
                readiness,
                first_attempt,
                precondition_met: None,
                correction: None,
                second_attempt: None,
            };
        }

        let precondition_met = self.check_precondition(self.plan.precondition_table).await;
        let correction = if precondition_met {
            Some(self.apply_correction().await)
        } else {
            None
        };

        log::info!("Retrying migrations");
        let second = self.run_migrations(true).await;

        RepairReport {
            started_at,
            readiness,
            first_attempt,
            precondition_met: Some(precondition_met),
            correction,
            second_attempt: Some(MigrationAttempt::from(&second)),
        }
    }
}

#[cfg(test)]
#[path = "sequencer_test.rs"]
mod tests;
