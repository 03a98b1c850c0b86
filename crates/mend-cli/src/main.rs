//! Mend CLI - drives schema migrations to completion with a one-shot
//! structural repair

use clap::Parser;

mod cli;
mod commands;
mod context;
mod logging;

use cli::Cli;
use commands::{check, correct, migrate, repair, wait};

/// Exit code for configuration and setup errors (matches clap's usage errors)
const EXIT_SETUP_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let result = match &cli.command {
        cli::Commands::Repair(args) => repair::execute(args, &cli.global).await,
        cli::Commands::Wait(args) => wait::execute(args, &cli.global).await,
        cli::Commands::Check(args) => check::execute(args, &cli.global).await,
        cli::Commands::Correct => correct::execute(&cli.global).await,
        cli::Commands::Migrate(args) => migrate::execute(args, &cli.global).await,
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_SETUP_ERROR
        }
    };
    std::process::exit(code);
}
