//! Correct command implementation

use anyhow::Result;
use mend_repair::Sequencer;

use crate::cli::GlobalArgs;
use crate::commands::common::{describe_best_effort, print_json};
use crate::context::RuntimeContext;

/// Execute the correct command.
///
/// Applies the corrective statements unconditionally. Statement failures
/// are reported but the command still exits 0.
pub async fn execute(global: &GlobalArgs) -> Result<i32> {
    let ctx = RuntimeContext::new(global, None)?;
    let sequencer = Sequencer::new(ctx.store.clone(), ctx.runner.clone(), &ctx.config);

    let report = sequencer.apply_correction().await;

    if global.json {
        print_json(&report)?;
    } else {
        println!("drop view: {}", describe_best_effort(&report.drop_view));
        println!("create view: {}", describe_best_effort(&report.create_view));
    }
    Ok(0)
}
