//! External tool subprocess runner
//!
//! Spawns the infra tool with a working directory, an argument list,
//! and an explicit child environment. Nonzero exits are data, not
//! errors: callers interpret the returned exit code. Only a failed
//! spawn is an error.

use crate::error::{DeployError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// External tool runner
#[derive(Debug, Clone)]
pub struct ToolRunner {
    binary: String,
    workdir: PathBuf,
    env: Vec<(String, String)>,
}

/// Result of one tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// The full command line, binary first.
    pub command: Vec<String>,
    /// Exit code; `None` when the child was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout; empty in inherited mode.
    pub stdout: String,
    /// Captured stderr; empty in inherited mode.
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

impl ToolRunner {
    pub fn new(binary: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            workdir: workdir.into(),
            env: Vec::new(),
        }
    }

    /// Add an environment variable for every invocation of this runner.
    ///
    /// The variables travel with the runner instead of the process
    /// environment, so nothing leaks across invocations.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run the tool with inherited stdio for interactive visibility.
    pub async fn run(&self, args: &[&str]) -> Result<ToolOutput> {
        tracing::debug!("Running: {} {}", self.binary, args.join(" "));

        let status = self
            .command(args)
            .status()
            .await
            .map_err(|source| DeployError::Launch {
                tool: self.binary.clone(),
                source,
            })?;

        Ok(ToolOutput {
            command: self.command_vec(args),
            code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    /// Run the tool with piped stdio, capturing output for inspection.
    pub async fn run_captured(&self, args: &[&str]) -> Result<ToolOutput> {
        tracing::debug!("Running (captured): {} {}", self.binary, args.join(" "));

        let mut cmd = self.command(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().await.map_err(|source| DeployError::Launch {
            tool: self.binary.clone(),
            source,
        })?;

        Ok(ToolOutput {
            command: self.command_vec(args),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        cmd.current_dir(&self.workdir);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }

    fn command_vec(&self, args: &[&str]) -> Vec<String> {
        std::iter::once(self.binary.clone())
            .chain(args.iter().map(|s| s.to_string()))
            .collect()
    }
}
