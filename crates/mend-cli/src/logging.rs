//! Log subscriber setup for the `mend` binary.
//!
//! Library crates log through the `log` facade; the fmt subscriber's
//! `tracing-log` bridge picks those records up. `MEND_LOG` takes any
//! `EnvFilter` directive string and wins over `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub(crate) const LOG_ENV: &str = "MEND_LOG";

/// Crates whose logs are shown at the selected level; everything else is `warn`
const MEND_TARGETS: &[&str] = &["mend", "mend_core", "mend_db", "mend_exec", "mend_repair"];

/// Default filter directives for the given verbosity
pub(crate) fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    std::iter::once("warn".to_string())
        .chain(MEND_TARGETS.iter().map(|t| format!("{t}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber; later calls are ignored
pub(crate) fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
