use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_repair_with_overrides() {
    let cli = Cli::try_parse_from([
        "mend",
        "repair",
        "--max-attempts",
        "5",
        "--interval-secs",
        "2",
        "--host",
        "clickhouse",
        "--port",
        "18123",
        "--json",
    ])
    .unwrap();

    assert_eq!(cli.global.host.as_deref(), Some("clickhouse"));
    assert_eq!(cli.global.port, Some(18123));
    assert!(cli.global.json);
    match cli.command {
        Commands::Repair(args) => {
            assert_eq!(args.poll.max_attempts, Some(5));
            assert_eq!(args.poll.interval_secs, Some(2));
            assert!(!args.skip_wait);
            assert!(!args.no_notify);
        }
        other => panic!("expected repair, got {other:?}"),
    }
}

#[test]
fn test_parse_global_flags_before_subcommand() {
    let cli = Cli::try_parse_from(["mend", "-v", "-c", "ops/mend.yml", "correct"]).unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.config.as_deref(), Some("ops/mend.yml"));
    assert!(matches!(cli.command, Commands::Correct));
}

#[test]
fn test_parse_check_and_migrate() {
    let cli = Cli::try_parse_from(["mend", "check", "--table", "sessions"]).unwrap();
    match cli.command {
        Commands::Check(args) => assert_eq!(args.table.as_deref(), Some("sessions")),
        other => panic!("expected check, got {other:?}"),
    }

    let cli = Cli::try_parse_from(["mend", "migrate", "--no-force"]).unwrap();
    match cli.command {
        Commands::Migrate(args) => assert!(args.no_force),
        other => panic!("expected migrate, got {other:?}"),
    }
}

#[test]
fn test_rejects_invalid_port() {
    assert!(Cli::try_parse_from(["mend", "wait", "--port", "70000"]).is_err());
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["mend"]).is_err());
}
