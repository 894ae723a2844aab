//! # AWS Secrets Manager Client
//!
//! Client for interacting with AWS Secrets Manager API.
//!
//! This module provides functionality to:
//! - Build an SDK client from an [`AwsCredentials`] block
//! - Issue `CreateSecret`, `GetSecretValue`, `UpdateSecret` and `DeleteSecret`
//!   calls, returning the SDK output types unchanged

use crate::error::{from_sdk, Result};
use crate::provider::{
    CreateSecretRequest, DeleteSecretRequest, GetSecretValueRequest, SecretsManagerApi,
    UpdateSecretRequest,
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::operation::{
    create_secret::CreateSecretOutput, delete_secret::DeleteSecretOutput,
    get_secret_value::GetSecretValueOutput, update_secret::UpdateSecretOutput,
};
use aws_sdk_secretsmanager::types::Tag;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;

mod auth;

pub use auth::AwsCredentials;

/// AWS Secrets Manager provider implementation
#[derive(Clone)]
pub struct AwsSecretsManager {
    client: SecretsManagerClient,
    region: Option<String>,
}

impl std::fmt::Debug for AwsSecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManager")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl AwsSecretsManager {
    /// Create a new AWS Secrets Manager client from a loaded SDK config
    #[must_use]
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: SecretsManagerClient::new(sdk_config),
            region: sdk_config.region().map(ToString::to_string),
        }
    }

    /// Wrap an already constructed SDK client
    #[must_use]
    pub fn from_client(client: SecretsManagerClient) -> Self {
        let region = client.config().region().map(ToString::to_string);
        Self { client, region }
    }

    #[must_use]
    pub fn client(&self) -> &SecretsManagerClient {
        &self.client
    }
}

#[async_trait]
impl SecretsManagerApi for AwsSecretsManager {
    async fn create_secret(&self, request: CreateSecretRequest) -> Result<CreateSecretOutput> {
        let (secret_string, secret_binary) = request.value.into_slots();
        let tags: Vec<Tag> = request
            .tags
            .into_iter()
            .map(|tag| Tag::builder().key(tag.key).value(tag.value).build())
            .collect();

        self.client
            .create_secret()
            .name(request.name)
            .set_secret_string(secret_string)
            .set_secret_binary(secret_binary)
            .set_description(request.description)
            .set_tags((!tags.is_empty()).then_some(tags))
            .send()
            .await
            .map_err(from_sdk)
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueOutput> {
        self.client
            .get_secret_value()
            .secret_id(request.secret_id)
            .set_version_id(request.version_id)
            .set_version_stage(request.version_stage)
            .send()
            .await
            .map_err(from_sdk)
    }

    async fn update_secret(&self, request: UpdateSecretRequest) -> Result<UpdateSecretOutput> {
        let (secret_string, secret_binary) = request.value.into_slots();

        self.client
            .update_secret()
            .secret_id(request.secret_id)
            .set_secret_string(secret_string)
            .set_secret_binary(secret_binary)
            .set_description(request.description)
            .send()
            .await
            .map_err(from_sdk)
    }

    async fn delete_secret(&self, request: DeleteSecretRequest) -> Result<DeleteSecretOutput> {
        self.client
            .delete_secret()
            .secret_id(request.secret_id)
            .set_recovery_window_in_days(request.recovery_window_in_days)
            .set_force_delete_without_recovery(request.force_delete_without_recovery)
            .send()
            .await
            .map_err(from_sdk)
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
