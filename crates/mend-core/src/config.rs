//! Configuration types for a repair run
//!
//! A [`RepairConfig`] is assembled once at process start, from (lowest to
//! highest priority) built-in defaults, an optional `mend.yml` file and the
//! process environment. The binary applies its own flag overrides on top and
//! hands the result to the sequencer, which never mutates it.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Selects the migration tool's configuration profile
pub const ENV_SETTINGS_PROFILE: &str = "SETTINGS_PROFILE";

/// Store auth username
pub const ENV_STORE_USER: &str = "STORE_USER";

/// Store auth password
pub const ENV_STORE_PASSWORD: &str = "STORE_PASSWORD";

/// Store HTTP interface port
pub const ENV_STORE_HTTP_PORT: &str = "STORE_HTTP_PORT";

/// Store hostname
pub const ENV_STORE_HOST: &str = "STORE_HOST";

/// Webhook receiving the final outcome
pub const ENV_NOTIFY_WEBHOOK: &str = "MEND_NOTIFY_WEBHOOK";

/// Default file name looked up by [`RepairConfig::load_from_dir`]
pub const CONFIG_FILE_NAME: &str = "mend.yml";

/// Complete configuration for one repair run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepairConfig {
    /// Target store connection
    #[serde(default)]
    pub store: StoreConfig,

    /// Migration tool invocation
    #[serde(default)]
    pub migration: MigrationConfig,

    /// Readiness polling budget
    #[serde(default)]
    pub readiness: ReadinessConfig,

    /// Outcome notification
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Connection settings for the store's HTTP query interface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Hostname (default: `localhost`)
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP interface port (default: 8123)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Auth username (default: `default`)
    #[serde(default = "default_user")]
    pub user: String,

    /// Auth password (default: empty)
    #[serde(default)]
    pub password: String,

    /// Database passed as the `database` query parameter (default: `default`)
    #[serde(default = "default_database")]
    pub database: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Base URL of the query endpoint, without query parameters
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }

    /// Per-request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// How the external migration tool is invoked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationConfig {
    /// Program followed by its arguments (default: `["migrate"]`)
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    /// Flag appended when a forced run is requested (default: `--force`)
    #[serde(default = "default_force_flag")]
    pub force_flag: String,

    /// Profile exported to the child as `SETTINGS_PROFILE` (default: unset)
    #[serde(default)]
    pub profile: Option<String>,

    /// Working directory for the child (default: inherited)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            force_flag: default_force_flag(),
            profile: None,
            working_dir: None,
        }
    }
}

/// Bounded readiness polling: fixed interval, fixed cap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadinessConfig {
    /// Maximum number of probe attempts (default: 60)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Seconds to sleep between failed probes (default: 1)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl ReadinessConfig {
    /// Sleep between failed probes
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Optional outcome notification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Discord-compatible webhook URL (default: unset, notification disabled)
    #[serde(default)]
    pub webhook_url: Option<String>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8123
}

fn default_user() -> String {
    "default".to_string()
}

fn default_database() -> String {
    "default".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_command() -> Vec<String> {
    vec!["migrate".to_string()]
}

fn default_force_flag() -> String {
    "--force".to_string()
}

fn default_max_attempts() -> u32 {
    60
}

fn default_interval_secs() -> u64 {
    1
}

impl RepairConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: RepairConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `mend.yml` from a directory, falling back to defaults when absent
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Self::default())
        }
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> CoreResult<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay recognised environment variables using `lookup`.
    ///
    /// Empty values count as unset, except for `STORE_PASSWORD` where an
    /// empty string is a legitimate (and the default) password.
    pub fn apply_env<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(profile) = non_empty(ENV_SETTINGS_PROFILE) {
            self.migration.profile = Some(profile);
        }
        if let Some(user) = non_empty(ENV_STORE_USER) {
            self.store.user = user;
        }
        if let Some(password) = lookup(ENV_STORE_PASSWORD) {
            self.store.password = password;
        }
        if let Some(port) = non_empty(ENV_STORE_HTTP_PORT) {
            self.store.port = parse_port(&port)?;
        }
        if let Some(host) = non_empty(ENV_STORE_HOST) {
            self.store.host = host;
        }
        if let Some(url) = non_empty(ENV_NOTIFY_WEBHOOK) {
            self.notify.webhook_url = Some(url);
        }

        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.store.host.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "store.host cannot be empty".to_string(),
            });
        }
        if self.store.port == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "store.port must be between 1 and 65535".to_string(),
            });
        }
        if self.migration.command.first().map_or(true, |p| p.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "migration.command must name a program".to_string(),
            });
        }
        if self.readiness.max_attempts == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "readiness.max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_port(raw: &str) -> CoreResult<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(CoreError::ConfigInvalid {
            message: format!("{ENV_STORE_HTTP_PORT} is not a valid port: '{raw}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
