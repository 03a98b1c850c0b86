//! Migrate command implementation

use anyhow::Result;
use mend_core::MigrationAttempt;
use mend_repair::Sequencer;

use crate::cli::{GlobalArgs, MigrateArgs};
use crate::commands::common::{print_attempt, print_json};
use crate::context::RuntimeContext;

/// Execute the migrate command; returns the tool's exit code unchanged
pub async fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<i32> {
    let ctx = RuntimeContext::new(global, None)?;
    let sequencer = Sequencer::new(ctx.store.clone(), ctx.runner.clone(), &ctx.config);

    let output = sequencer.run_migrations(!args.no_force).await;
    let attempt = MigrationAttempt::from(&output);

    if global.json {
        print_json(&attempt)?;
    } else {
        print_attempt("migration", &attempt);
    }
    Ok(attempt.exit_code)
}
