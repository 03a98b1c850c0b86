use super::*;

fn global(config: Option<&Path>) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        config: config.map(|p| p.display().to_string()),
        host: None,
        port: None,
        json: false,
    }
}

fn no_env(_: &str) -> Option<String> {
    None
}

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mend.yml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_file_then_env_then_flags() {
    let (_dir, path) = write_config("store:\n  host: from-file\n  port: 1111\n  user: file-user\n");
    let lookup = |key: &str| match key {
        "STORE_HTTP_PORT" => Some("2222".to_string()),
        "STORE_USER" => Some("env-user".to_string()),
        _ => None,
    };

    let mut args = global(Some(&path));
    let config = resolve_config(&args, None, lookup).unwrap();
    assert_eq!(config.store.host, "from-file");
    assert_eq!(config.store.port, 2222);
    assert_eq!(config.store.user, "env-user");

    args.host = Some("from-flag".to_string());
    args.port = Some(3333);
    let config = resolve_config(&args, None, lookup).unwrap();
    assert_eq!(config.store.host, "from-flag");
    assert_eq!(config.store.port, 3333);
}

#[test]
fn test_poll_flags_override_file() {
    let (_dir, path) = write_config("readiness:\n  max_attempts: 10\n  interval_secs: 5\n");
    let poll = PollArgs {
        max_attempts: Some(3),
        interval_secs: None,
    };

    let config = resolve_config(&global(Some(&path)), Some(&poll), no_env).unwrap();
    assert_eq!(config.readiness.max_attempts, 3);
    assert_eq!(config.readiness.interval_secs, 5);
}

#[test]
fn test_zero_attempts_flag_rejected() {
    let (_dir, path) = write_config("{}\n");
    let poll = PollArgs {
        max_attempts: Some(0),
        interval_secs: None,
    };
    assert!(resolve_config(&global(Some(&path)), Some(&poll), no_env).is_err());
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = resolve_config(&global(Some(&dir.path().join("absent.yml"))), None, no_env)
        .unwrap_err();
    assert!(format!("{err:#}").contains("[E001]"));
}

#[test]
fn test_bad_env_port_is_error() {
    let (_dir, path) = write_config("{}\n");
    let lookup = |key: &str| (key == "STORE_HTTP_PORT").then(|| "not-a-port".to_string());
    let err = resolve_config(&global(Some(&path)), None, lookup).unwrap_err();
    assert!(format!("{err:#}").contains("STORE_HTTP_PORT"));
}

#[tokio::test]
async fn test_from_config_builds_runner() {
    let mut config = RepairConfig::default();
    config.migration.command = vec!["migrate".to_string(), "up".to_string()];
    let ctx = RuntimeContext::from_config(config).unwrap();
    assert_eq!(ctx.runner.describe(true), "migrate up --force");
    assert_eq!(ctx.store.store_type(), "http");
    assert_eq!(ctx.target(), "localhost:8123");
}
