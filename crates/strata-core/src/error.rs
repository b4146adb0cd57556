//! Core error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "no configuration file found\nsearched: $STRATA_CONFIG, strata.yaml, .strata.yaml\nhint: run from the project root or set STRATA_CONFIG"
    )]
    ConfigNotFound,

    #[error("invalid configuration: {path}\nreason: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("missing environment variables. Please set: {}", .0.join(", "))]
    MissingEnvironment(Vec<String>),
}

pub type Result<T> = std::result::Result<T, CoreError>;
