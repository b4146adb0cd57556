//! Plan outcome interpretation and the transient plan artifact
//!
//! Encodes the detailed-exitcode convention shared by
//! terraform-compatible tools: 0 means no changes, 1 means the plan
//! itself failed, 2 means changes are pending.

use std::path::{Path, PathBuf};

/// Fixed name of the plan output file inside the working directory.
pub const PLAN_FILE: &str = "tfplan";

/// Interpretation of a plan invocation's exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Exit 0: infrastructure already matches the configuration.
    NoChanges,
    /// Exit 2: a plan was produced and changes are pending.
    ChangesPending,
    /// Exit 1: the plan itself failed.
    ExecutionError,
    /// Any other exit code; never treated as success.
    UnknownExitCode(i32),
}

impl PlanOutcome {
    /// Map a raw exit code onto the tri-state convention.
    ///
    /// A `None` code (child killed by a signal) lands in the unknown
    /// branch.
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => PlanOutcome::NoChanges,
            Some(1) => PlanOutcome::ExecutionError,
            Some(2) => PlanOutcome::ChangesPending,
            Some(other) => PlanOutcome::UnknownExitCode(other),
            None => PlanOutcome::UnknownExitCode(-1),
        }
    }
}

impl std::fmt::Display for PlanOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanOutcome::NoChanges => write!(f, "no changes"),
            PlanOutcome::ChangesPending => write!(f, "changes pending"),
            PlanOutcome::ExecutionError => write!(f, "execution error"),
            PlanOutcome::UnknownExitCode(code) => write!(f, "unknown exit code {code}"),
        }
    }
}

/// Guard for the transient plan file.
///
/// The file is removed exactly once per run: explicitly via
/// [`PlanArtifact::remove`] on the normal paths, or in `Drop` when the
/// run unwinds or is cancelled before reaching it.
#[derive(Debug)]
pub struct PlanArtifact {
    path: PathBuf,
    removed: bool,
}

impl PlanArtifact {
    pub fn new(workdir: &Path) -> Self {
        Self {
            path: workdir.join(PLAN_FILE),
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the plan file if it exists.
    pub fn remove(mut self) {
        self.cleanup();
    }

    fn cleanup(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;

        if self.path.exists() {
            match std::fs::remove_file(&self.path) {
                Ok(()) => tracing::debug!("Removed plan file {}", self.path.display()),
                Err(e) => {
                    tracing::warn!("Failed to remove plan file {}: {}", self.path.display(), e)
                }
            }
        }
    }
}

impl Drop for PlanArtifact {
    fn drop(&mut self) {
        self.cleanup();
    }
}
