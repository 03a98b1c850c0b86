//! Repair command implementation

use anyhow::Result;
use mend_core::RepairReport;
use mend_repair::{Sequencer, WebhookNotifier};
use std::io::Write;

use crate::cli::{GlobalArgs, RepairArgs};
use crate::commands::common::{describe_best_effort, print_attempt, write_json};
use crate::context::RuntimeContext;

/// Execute the repair command; returns the final migration exit code
pub async fn execute(args: &RepairArgs, global: &GlobalArgs) -> Result<i32> {
    let ctx = RuntimeContext::new(global, Some(&args.poll))?;
    let target = ctx.target();

    let sequencer = Sequencer::new(ctx.store.clone(), ctx.runner.clone(), &ctx.config)
        .skip_wait(args.skip_wait);
    let report = sequencer.run().await;

    if global.json {
        emit_json(&mut std::io::stdout().lock(), &report);
    } else {
        print_report(&report, &target);
    }

    if !args.no_notify {
        if let Some(url) = &ctx.config.notify.webhook_url {
            match WebhookNotifier::new(url.clone()) {
                Ok(notifier) => {
                    let _ = notifier.notify(&report, &target).await;
                }
                Err(e) => log::warn!("Notification disabled: {e}"),
            }
        }
    }

    Ok(report.exit_code())
}

/// Write the JSON report; a failed write is logged and never changes the
/// exit code, which belongs to the migration tool.
fn emit_json<W: Write>(out: &mut W, report: &RepairReport) -> bool {
    match write_json(out, report) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to print report: {e:#}");
            false
        }
    }
}

fn print_report(report: &RepairReport, target: &str) {
    println!("Repair run against {target}");
    match report.readiness {
        Some(r) if r.ready => println!("  store: ready after {} attempt(s)", r.attempts),
        Some(r) => println!("  store: not ready after {} attempts (continued)", r.attempts),
        None => println!("  store: readiness check skipped"),
    }
    print_attempt("first migration", &report.first_attempt);

    if let Some(present) = report.precondition_met {
        println!(
            "  precondition table: {}",
            if present { "present" } else { "absent" }
        );
    }
    if let Some(correction) = &report.correction {
        println!("  drop view: {}", describe_best_effort(&correction.drop_view));
        println!("  create view: {}", describe_best_effort(&correction.create_view));
    }
    if let Some(second) = &report.second_attempt {
        print_attempt("second migration", second);
    }

    println!();
    println!("{}", report.summary());
}
