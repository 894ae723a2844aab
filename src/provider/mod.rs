//! # Provider Modules
//!
//! The seam between the tasks and the remote secret-management service.
//!
//! - `SecretsManagerApi` is the request/response protocol (create, get,
//!   update, delete). Responses are the service's own output types and are
//!   handed back to callers untouched.
//! - `SecretsManagerCredentials` produces an authenticated client for one
//!   task invocation.

use crate::error::Result;
use crate::secret::SecretValue;
use async_trait::async_trait;
use aws_sdk_secretsmanager::operation::{
    create_secret::CreateSecretOutput, delete_secret::DeleteSecretOutput,
    get_secret_value::GetSecretValueOutput, update_secret::UpdateSecretOutput,
};

pub mod aws;

/// Key/value tag attached to a secret at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretTag {
    pub key: String,
    pub value: String,
}

impl SecretTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// `CreateSecret` request
#[derive(Debug, Clone)]
pub struct CreateSecretRequest {
    pub name: String,
    pub value: SecretValue,
    pub description: Option<String>,
    pub tags: Vec<SecretTag>,
}

/// `GetSecretValue` request
#[derive(Debug, Clone, Default)]
pub struct GetSecretValueRequest {
    pub secret_id: String,
    pub version_id: Option<String>,
    pub version_stage: Option<String>,
}

/// `UpdateSecret` request
#[derive(Debug, Clone)]
pub struct UpdateSecretRequest {
    pub secret_id: String,
    pub value: SecretValue,
    pub description: Option<String>,
}

/// `DeleteSecret` request
///
/// Exactly one of the two deletion modes is set: either a recovery window or
/// forced deletion.
#[derive(Debug, Clone, Default)]
pub struct DeleteSecretRequest {
    pub secret_id: String,
    pub recovery_window_in_days: Option<i64>,
    pub force_delete_without_recovery: Option<bool>,
}

/// Request/response protocol of the secret-management service
#[async_trait]
pub trait SecretsManagerApi: Send + Sync {
    async fn create_secret(&self, request: CreateSecretRequest) -> Result<CreateSecretOutput>;

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueOutput>;

    async fn update_secret(&self, request: UpdateSecretRequest) -> Result<UpdateSecretOutput>;

    async fn delete_secret(&self, request: DeleteSecretRequest) -> Result<DeleteSecretOutput>;

    /// Region label for logs and spans
    fn region(&self) -> Option<&str> {
        None
    }
}

/// Source of an authenticated client
///
/// A client is acquired for each task invocation and dropped when the task
/// returns.
#[async_trait]
pub trait SecretsManagerCredentials: Send + Sync {
    type Client: SecretsManagerApi;

    async fn secrets_manager_client(&self) -> Result<Self::Client>;
}
