//! Strata core configuration
//!
//! The declarative configuration model, its discovery/loading logic,
//! and the eager environment validation shared by the Strata crates.

pub mod config;
pub mod env;
pub mod error;

pub use config::{
    BackendConfig, CONFIG_ENV, DeployConfig, ToolConfig, find_config_file, load_config,
    load_config_at, load_config_file,
};
pub use env::{REGION_VAR, check_environment};
pub use error::{CoreError, Result};
