//! Deployment error taxonomy
//!
//! Every fatal kind is its own variant so callers and tests can
//! discriminate without parsing messages. None of these are retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    /// The external executable could not be started at all.
    #[error("unable to launch '{tool}': {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and returned a failure-class exit code.
    #[error("'{command}' failed with exit code {code}: {stderr}")]
    ToolFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The plan phase itself failed (exit code 1).
    #[error("plan failed: {stderr}")]
    PlanFailed { stderr: String },

    /// The plan returned an exit code outside the tri-state convention.
    #[error("plan returned unknown exit code {0}")]
    UnknownExitCode(i32),

    /// A parameter-store read failed; no backend file was written.
    #[error("parameter lookup failed for '{name}': {message}")]
    ParameterLookup { name: String, message: String },

    #[error("{} is not set", strata_core::REGION_VAR)]
    RegionNotSet,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeployError>;
