//! Caller identity check
//!
//! Verifies that credentials resolve before any action that could
//! touch real infrastructure, and gives the run log a principal to
//! attribute the deployment to.

use crate::error::{AwsError, Result};

/// Resolved caller identity from STS.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub arn: String,
    pub account: String,
}

/// Resolve the current identity via STS get-caller-identity.
pub async fn caller_identity() -> Result<CallerIdentity> {
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_sts::Client::new(&config);

    let response = client
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| AwsError::IdentityCheckFailed(e.to_string()))?;

    Ok(CallerIdentity {
        arn: response.arn().unwrap_or_default().to_string(),
        account: response.account().unwrap_or_default().to_string(),
    })
}
