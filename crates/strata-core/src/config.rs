//! Declarative deployment configuration
//!
//! Search order for the configuration file:
//! 1. `STRATA_CONFIG` environment variable (direct path)
//! 2. Current directory: `strata.yaml`, `.strata.yaml`

use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "STRATA_CONFIG";

const CANDIDATES: [&str; 2] = ["strata.yaml", ".strata.yaml"];

/// Resolved configuration for a single deployment run.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    pub tool: ToolConfig,
}

/// The external tool and where it runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// Binary driven by the deployment; any tool speaking the
    /// terraform plan/init/apply verbs works.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Directory containing the root module the tool runs against.
    pub root_module: PathBuf,

    /// Optional toolchain manager (e.g. `tfenv`) run before init.
    #[serde(default)]
    pub version_manager: Option<String>,

    pub backend: BackendConfig,
}

/// Remote-state backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Backend-config file name, relative to the root module.
    #[serde(default = "default_backend_file")]
    pub file: String,

    /// Remote state object key.
    pub key: String,

    #[serde(default = "default_encrypt")]
    pub encrypt: bool,

    /// Parameter-store name holding the state bucket.
    pub state_bucket_parameter: String,

    /// Parameter-store name holding the lock table.
    pub lock_table_parameter: String,
}

fn default_binary() -> String {
    "terraform".to_string()
}

fn default_backend_file() -> String {
    "config.s3.tfbackend".to_string()
}

fn default_encrypt() -> bool {
    true
}

impl DeployConfig {
    /// Path of the backend-config file inside the root module.
    pub fn backend_file_path(&self) -> PathBuf {
        self.tool.root_module.join(&self.tool.backend.file)
    }
}

/// Locate the configuration file for the project in `dir`.
pub fn find_config_file(dir: &Path) -> Result<PathBuf> {
    // Direct override via environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
    }

    for name in CANDIDATES {
        let path = dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }

    Err(CoreError::ConfigNotFound)
}

/// Load and resolve a configuration file.
///
/// A relative `root_module` is resolved against the configuration
/// file's directory, so the tool runs in the same place no matter
/// where the CLI was invoked from.
pub fn load_config_file(path: &Path) -> Result<DeployConfig> {
    let content = std::fs::read_to_string(path)?;
    let mut config: DeployConfig = serde_yaml::from_str(&content)?;

    if config.tool.root_module.is_relative()
        && let Some(parent) = path.parent()
    {
        config.tool.root_module = parent.join(&config.tool.root_module);
    }

    if !config.tool.root_module.is_dir() {
        return Err(CoreError::InvalidConfig {
            path: path.to_path_buf(),
            message: format!(
                "root_module '{}' is not a directory",
                config.tool.root_module.display()
            ),
        });
    }

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Discover and load the configuration for the project in `dir`.
pub fn load_config_at(dir: &Path) -> Result<DeployConfig> {
    let path = find_config_file(dir)?;
    load_config_file(&path)
}

/// Discover and load the configuration from the current directory.
pub fn load_config() -> Result<DeployConfig> {
    load_config_at(&std::env::current_dir()?)
}
