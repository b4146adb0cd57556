//! Environment validation
//!
//! Checked eagerly, before any action that could touch real
//! infrastructure.

use crate::error::{CoreError, Result};

/// Region variable the backend file and the tool both depend on.
pub const REGION_VAR: &str = "AWS_DEFAULT_REGION";

/// Validate the ambient environment and return the deployment region.
///
/// Every missing variable is collected and reported in one pass rather
/// than failing on the first.
pub fn check_environment() -> Result<String> {
    let mut missing = Vec::new();

    let region = std::env::var(REGION_VAR).ok().filter(|v| !v.is_empty());
    if region.is_none() {
        missing.push(REGION_VAR.to_string());
    }

    match region {
        Some(region) => Ok(region),
        None => Err(CoreError::MissingEnvironment(missing)),
    }
}
