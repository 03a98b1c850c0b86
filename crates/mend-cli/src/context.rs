//! Runtime context for CLI commands

use anyhow::{Context, Result};
use mend_core::config::{
    ENV_STORE_HOST, ENV_STORE_HTTP_PORT, ENV_STORE_PASSWORD, ENV_STORE_USER,
};
use mend_core::RepairConfig;
use mend_db::{HttpStore, Store};
use mend_exec::{MigrationRunner, ProcessRunner};
use std::path::Path;
use std::sync::Arc;

use crate::cli::{GlobalArgs, PollArgs};

/// Resolved configuration plus the store and migration runner built from it
pub(crate) struct RuntimeContext {
    pub config: RepairConfig,
    pub store: Arc<dyn Store>,
    pub runner: Arc<dyn MigrationRunner>,
}

impl RuntimeContext {
    /// Resolve configuration from file, environment and flags, then connect
    pub fn new(global: &GlobalArgs, poll: Option<&PollArgs>) -> Result<Self> {
        let config = resolve_config(global, poll, |key| std::env::var(key).ok())?;
        Self::from_config(config)
    }

    /// Build the store client and migration runner for `config`
    pub fn from_config(config: RepairConfig) -> Result<Self> {
        let store: Arc<dyn Store> =
            Arc::new(HttpStore::new(&config.store).context("Failed to create store client")?);

        // The migration tool talks to the same store; hand it the resolved
        // connection so flag overrides reach it too.
        let runner = ProcessRunner::from_config(&config.migration)
            .context("Invalid migration command")?
            .with_env(ENV_STORE_HOST, &config.store.host)
            .with_env(ENV_STORE_HTTP_PORT, config.store.port.to_string())
            .with_env(ENV_STORE_USER, &config.store.user)
            .with_env(ENV_STORE_PASSWORD, &config.store.password);

        log::debug!(
            "Store endpoint {} (database '{}'), migration command: {}",
            config.store.base_url(),
            config.store.database,
            runner.describe(true)
        );

        Ok(Self {
            config,
            store,
            runner: Arc::new(runner),
        })
    }

    /// `host:port` of the store, for messages
    pub fn target(&self) -> String {
        format!("{}:{}", self.config.store.host, self.config.store.port)
    }
}

/// Merge configuration sources, lowest priority first: defaults, YAML file
/// (`--config`, else `./mend.yml` if present), environment, flags.
pub(crate) fn resolve_config<F>(
    global: &GlobalArgs,
    poll: Option<&PollArgs>,
    lookup: F,
) -> Result<RepairConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &global.config {
        Some(path) => RepairConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load configuration file {path}"))?,
        None => RepairConfig::load_from_dir(Path::new("."))
            .context("Failed to load ./mend.yml")?,
    };

    config
        .apply_env(lookup)
        .context("Invalid configuration in environment")?;

    if let Some(host) = &global.host {
        config.store.host = host.clone();
    }
    if let Some(port) = global.port {
        config.store.port = port;
    }
    if let Some(poll) = poll {
        if let Some(max_attempts) = poll.max_attempts {
            config.readiness.max_attempts = max_attempts;
        }
        if let Some(interval_secs) = poll.interval_secs {
            config.readiness.interval_secs = interval_secs;
        }
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
