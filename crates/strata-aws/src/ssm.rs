//! SSM-backed parameter store

use async_trait::async_trait;
use strata_deploy::{DeployError, ParameterStore};

/// Parameter store backed by AWS Systems Manager Parameter Store.
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    /// Build a store from the ambient AWS configuration.
    pub async fn from_env() -> Self {
        let config = aws_config::load_from_env().await;
        Self {
            client: aws_sdk_ssm::Client::new(&config),
        }
    }

    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str) -> strata_deploy::Result<String> {
        tracing::debug!("Reading SSM parameter {}", name);

        let response = self
            .client
            .get_parameter()
            .name(name)
            .send()
            .await
            .map_err(|e| DeployError::ParameterLookup {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        response
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_string)
            .ok_or_else(|| DeployError::ParameterLookup {
                name: name.to_string(),
                message: "parameter has no value".to_string(),
            })
    }
}
