//! Check command implementation

use anyhow::Result;
use mend_repair::Sequencer;
use serde::Serialize;

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::common::print_json;
use crate::context::RuntimeContext;

#[derive(Serialize)]
struct CheckOutput<'a> {
    table: &'a str,
    present: bool,
}

/// Execute the check command; query failures report the table as absent
pub async fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<i32> {
    let ctx = RuntimeContext::new(global, None)?;
    let sequencer = Sequencer::new(ctx.store.clone(), ctx.runner.clone(), &ctx.config);

    let table = args
        .table
        .as_deref()
        .unwrap_or(sequencer.plan().precondition_table);
    let present = sequencer.check_precondition(table).await;

    if global.json {
        print_json(&CheckOutput { table, present })?;
    } else {
        println!("{table}: {}", if present { "present" } else { "absent" });
    }
    Ok(0)
}
