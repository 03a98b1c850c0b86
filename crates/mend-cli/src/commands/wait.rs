//! Wait command implementation

use anyhow::Result;
use mend_repair::Sequencer;

use crate::cli::{GlobalArgs, WaitArgs};
use crate::commands::common::print_json;
use crate::context::RuntimeContext;

/// Execute the wait command; exits 0 once the store answers, 1 otherwise
pub async fn execute(args: &WaitArgs, global: &GlobalArgs) -> Result<i32> {
    let ctx = RuntimeContext::new(global, Some(&args.poll))?;
    let readiness = &ctx.config.readiness;

    let sequencer = Sequencer::new(ctx.store.clone(), ctx.runner.clone(), &ctx.config);
    let result = sequencer
        .wait_for_store_ready(readiness.max_attempts, readiness.interval())
        .await;

    if global.json {
        print_json(&result)?;
    } else if result.ready {
        println!("{} ready after {} attempt(s)", ctx.target(), result.attempts);
    } else {
        println!(
            "{} not ready after {} attempts",
            ctx.target(),
            result.attempts
        );
    }

    Ok(if result.ready { 0 } else { 1 })
}
