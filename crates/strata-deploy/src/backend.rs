//! Remote-state backend configuration
//!
//! Resolves the state bucket and lock table from a parameter store and
//! renders the backend-config file consumed by the tool's init command.

use crate::error::{DeployError, Result};
use crate::output;
use async_trait::async_trait;
use std::path::PathBuf;
use strata_core::{DeployConfig, REGION_VAR};

/// Key/value parameter store holding the backend identifiers.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Read one string-valued named parameter.
    async fn get_parameter(&self, name: &str) -> Result<String>;
}

/// Renders the backend-config file from config plus store lookups.
pub struct BackendWriter<'a> {
    store: &'a dyn ParameterStore,
}

impl<'a> BackendWriter<'a> {
    pub fn new(store: &'a dyn ParameterStore) -> Self {
        Self { store }
    }

    /// Ensure the backend-config file exists, returning its path.
    ///
    /// An existing file is left untouched unless `force` is set:
    /// re-running a deployment must not silently rotate backend
    /// credentials. The final contents are echoed either way so the
    /// run log always shows what the tool will init against.
    pub async fn ensure(&self, config: &DeployConfig, force: bool) -> Result<PathBuf> {
        let path = config.backend_file_path();

        if path.exists() && !force {
            println!("Using existing backend config at {}. Contents:\n", path.display());
            output::echo_file(&path)?;
            return Ok(path);
        }

        println!("Generating a new {} file. Contents:\n", path.display());

        let backend = &config.tool.backend;
        let bucket = self
            .store
            .get_parameter(&backend.state_bucket_parameter)
            .await?;
        let lock_table = self
            .store
            .get_parameter(&backend.lock_table_parameter)
            .await?;

        // Ambient region, read at call time
        let region = std::env::var(REGION_VAR).map_err(|_| DeployError::RegionNotSet)?;

        let contents = format!(
            "bucket = \"{}\"\nkey = \"{}\"\nregion = \"{}\"\ndynamodb_table = \"{}\"\nencrypt = {}\n",
            bucket, backend.key, region, lock_table, backend.encrypt
        );

        // Stage beside the target and rename into place
        let staging = path.with_extension("tfbackend.tmp");
        tokio::fs::write(&staging, &contents).await?;
        tokio::fs::rename(&staging, &path).await?;
        tracing::debug!("Wrote backend config to {}", path.display());

        output::echo_file(&path)?;
        Ok(path)
    }
}
