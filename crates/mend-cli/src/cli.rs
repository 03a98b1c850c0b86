//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Mend - run schema migrations, repairing a known view collision on failure
#[derive(Parser, Debug)]
#[command(name = "mend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: ./mend.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override store host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Override store HTTP port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Print the result as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wait for the store, migrate, and repair + retry once on failure
    Repair(RepairArgs),

    /// Only wait for the store to accept queries
    Wait(WaitArgs),

    /// Only check whether the precondition table exists
    Check(CheckArgs),

    /// Only apply the corrective statements (best-effort, idempotent)
    Correct,

    /// Run the migration tool once
    Migrate(MigrateArgs),
}

/// Readiness polling overrides
#[derive(Args, Debug, Clone, Default)]
pub struct PollArgs {
    /// Maximum readiness probes (default: 60)
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Seconds between readiness probes (default: 1)
    #[arg(long)]
    pub interval_secs: Option<u64>,
}

/// Arguments for the repair command
#[derive(Args, Debug)]
pub struct RepairArgs {
    #[command(flatten)]
    pub poll: PollArgs,

    /// Skip the readiness poll
    #[arg(long)]
    pub skip_wait: bool,

    /// Do not post the outcome even if a webhook is configured
    #[arg(long)]
    pub no_notify: bool,
}

/// Arguments for the wait command
#[derive(Args, Debug)]
pub struct WaitArgs {
    #[command(flatten)]
    pub poll: PollArgs,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Table to look for (default: the correction's precondition table)
    #[arg(long)]
    pub table: Option<String>,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Run without the forcing flag
    #[arg(long)]
    pub no_force: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
