//! Migration tool invocation through `tokio::process`

use crate::error::{ExecError, ExecResult};
use crate::output::ProcessOutput;
use crate::traits::MigrationRunner;
use async_trait::async_trait;
use mend_core::config::ENV_SETTINGS_PROFILE;
use mend_core::MigrationConfig;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Runs the configured migration command as a child process.
///
/// The child inherits the parent's environment, plus `SETTINGS_PROFILE`
/// when a profile is configured and any variables added with
/// [`ProcessRunner::with_env`]. Stdin is closed; stdout and stderr are
/// captured. No timeout is applied.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    args: Vec<String>,
    force_flag: String,
    profile: Option<String>,
    working_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl ProcessRunner {
    /// Build a runner from the migration section of the config
    pub fn from_config(config: &MigrationConfig) -> ExecResult<Self> {
        let (program, args) = config
            .command
            .split_first()
            .filter(|(program, _)| !program.trim().is_empty())
            .ok_or(ExecError::EmptyCommand)?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            force_flag: config.force_flag.clone(),
            profile: config.profile.clone(),
            working_dir: config.working_dir.clone(),
            envs: Vec::new(),
        })
    }

    /// Export an extra environment variable to the child
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Arguments passed to the program for one run
    pub fn command_args(&self, force: bool) -> Vec<&str> {
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        if force && !self.force_flag.is_empty() {
            args.push(&self.force_flag);
        }
        args
    }

    async fn spawn_and_wait(&self, force: bool) -> ExecResult<ProcessOutput> {
        let started = Instant::now();

        let mut command = Command::new(&self.program);
        command
            .args(self.command_args(force))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(profile) = &self.profile {
            command.env(ENV_SETTINGS_PROFILE, profile);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let child = command.spawn().map_err(|source| ExecError::SpawnFailed {
            program: self.program.clone(),
            source,
        })?;
        let output = child
            .wait_with_output()
            .await
            .map_err(|source| ExecError::WaitFailed {
                program: self.program.clone(),
                source,
            })?;

        Ok(ProcessOutput::from_status(
            output.status,
            &output.stdout,
            &output.stderr,
            started.elapsed(),
        ))
    }
}

#[async_trait]
impl MigrationRunner for ProcessRunner {
    async fn run(&self, force: bool) -> ProcessOutput {
        let started = Instant::now();
        log::debug!("Running migration tool: {}", self.describe(force));

        let output = match self.spawn_and_wait(force).await {
            Ok(output) => output,
            Err(e) => {
                log::error!("{e}");
                ProcessOutput::from_error(&e, started.elapsed())
            }
        };

        for line in output.stdout.lines() {
            log::debug!("[migrate] {line}");
        }
        for line in output.stderr.lines() {
            log::debug!("[migrate:stderr] {line}");
        }
        log::debug!(
            "Migration tool exited with {} after {:.1}s",
            output.exit_code,
            output.duration.as_secs_f64()
        );
        output
    }

    fn describe(&self, force: bool) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.command_args(force))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "process_test.rs"]
mod tests;
