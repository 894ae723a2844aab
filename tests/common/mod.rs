//! Common test utilities for the task integration tests
//!
//! Provides an in-memory Secrets Manager that speaks the same request/response
//! protocol as the SDK adapter, plus rustls crypto provider setup for the
//! contract tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use async_trait::async_trait;
use aws_sdk_secretsmanager::operation::{
    create_secret::CreateSecretOutput, delete_secret::DeleteSecretOutput,
    get_secret_value::GetSecretValueOutput, update_secret::UpdateSecretOutput,
};
use aws_sdk_secretsmanager::primitives::{Blob, DateTime};
use aws_sdk_secretsmanager::types::error::{
    InvalidParameterException, InvalidRequestException, ResourceExistsException,
    ResourceNotFoundException,
};
use secrets_manager_tasks::constants::{AWS_CURRENT, AWS_PREVIOUS};
use secrets_manager_tasks::provider::{
    CreateSecretRequest, DeleteSecretRequest, GetSecretValueRequest, SecretTag,
    SecretsManagerApi, SecretsManagerCredentials, UpdateSecretRequest,
};
use secrets_manager_tasks::{SecretValue, TaskError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static RUSTLS_INIT: Once = Once::new();

/// Initialize rustls crypto provider for tests
///
/// Uses a `Once` to ensure it's only called once across all tests.
pub fn init_rustls() {
    RUSTLS_INIT.call_once(|| {
        // Another provider may already be installed by a dependency
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

const REGION: &str = "us-east-1";
const ACCOUNT_ID: &str = "123456789012";

#[derive(Debug, Clone)]
struct StoredVersion {
    version_id: String,
    value: SecretValue,
}

#[derive(Debug, Clone)]
struct StoredSecret {
    arn: String,
    name: String,
    description: Option<String>,
    tags: Vec<SecretTag>,
    versions: Vec<StoredVersion>,
    current: usize,
    previous: Option<usize>,
    deletion_date: Option<DateTime>,
}

impl StoredSecret {
    fn current_version(&self) -> &StoredVersion {
        &self.versions[self.current]
    }
}

#[derive(Debug, Default)]
struct State {
    secrets: HashMap<String, StoredSecret>,
    calls: Vec<&'static str>,
}

impl State {
    /// Find a secret by name or ARN
    fn find(&self, secret_id: &str) -> Option<&StoredSecret> {
        self.secrets
            .get(secret_id)
            .or_else(|| self.secrets.values().find(|s| s.arn == secret_id))
    }

    fn find_mut(&mut self, secret_id: &str) -> Option<&mut StoredSecret> {
        let name = self.find(secret_id)?.name.clone();
        self.secrets.get_mut(&name)
    }
}

/// In-memory stand-in for AWS Secrets Manager
#[derive(Debug, Clone, Default)]
pub struct InMemorySecretsManager {
    state: Arc<Mutex<State>>,
}

impl InMemorySecretsManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("in-memory state poisoned")
    }

    /// Operation names received so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.lock().calls.iter().filter(|c| **c == operation).count()
    }

    /// Current stored value, bypassing the tasks
    pub fn stored_value(&self, secret_id: &str) -> Option<SecretValue> {
        self.lock()
            .find(secret_id)
            .map(|s| s.current_version().value.clone())
    }

    pub fn stored_description(&self, secret_id: &str) -> Option<String> {
        self.lock()
            .find(secret_id)
            .and_then(|s| s.description.clone())
    }

    pub fn stored_tags(&self, secret_id: &str) -> Vec<SecretTag> {
        self.lock()
            .find(secret_id)
            .map(|s| s.tags.clone())
            .unwrap_or_default()
    }

    pub fn contains(&self, secret_id: &str) -> bool {
        self.lock().find(secret_id).is_some()
    }

    pub fn is_scheduled_for_deletion(&self, secret_id: &str) -> bool {
        self.lock()
            .find(secret_id)
            .is_some_and(|s| s.deletion_date.is_some())
    }
}

fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}

fn smithy_date(date: chrono::DateTime<chrono::Utc>) -> DateTime {
    DateTime::from_secs(date.timestamp())
}

fn not_found() -> TaskError {
    TaskError::Service(aws_sdk_secretsmanager::Error::ResourceNotFoundException(
        ResourceNotFoundException::builder()
            .message("Secrets Manager can't find the specified secret.")
            .build(),
    ))
}

fn already_exists(name: &str) -> TaskError {
    TaskError::Service(aws_sdk_secretsmanager::Error::ResourceExistsException(
        ResourceExistsException::builder()
            .message(format!("The operation failed because the secret {name} already exists."))
            .build(),
    ))
}

fn marked_for_deletion() -> TaskError {
    TaskError::Service(aws_sdk_secretsmanager::Error::InvalidRequestException(
        InvalidRequestException::builder()
            .message("You can't perform this operation on the secret because it was marked for deletion.")
            .build(),
    ))
}

fn invalid_parameter(message: &str) -> TaskError {
    TaskError::Service(aws_sdk_secretsmanager::Error::InvalidParameterException(
        InvalidParameterException::builder().message(message).build(),
    ))
}

fn new_version(value: SecretValue) -> StoredVersion {
    StoredVersion {
        version_id: uuid::Uuid::new_v4().to_string(),
        value,
    }
}

fn slots(value: &SecretValue) -> (Option<String>, Option<Blob>) {
    match value {
        SecretValue::Text(text) => (Some(text.clone()), None),
        SecretValue::Binary(bytes) => (None, Some(Blob::new(bytes.clone()))),
    }
}

#[async_trait]
impl SecretsManagerApi for InMemorySecretsManager {
    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<CreateSecretOutput, TaskError> {
        let mut state = self.lock();
        state.calls.push("CreateSecret");

        if let Some(existing) = state.find(&request.name) {
            return Err(if existing.deletion_date.is_some() {
                marked_for_deletion()
            } else {
                already_exists(&request.name)
            });
        }

        let version = new_version(request.value);
        let version_id = version.version_id.clone();
        let arn = format!(
            "arn:aws:secretsmanager:{REGION}:{ACCOUNT_ID}:secret:{}-{}",
            request.name,
            &version_id[..6]
        );
        state.secrets.insert(
            request.name.clone(),
            StoredSecret {
                arn: arn.clone(),
                name: request.name.clone(),
                description: request.description,
                tags: request.tags,
                versions: vec![version],
                current: 0,
                previous: None,
                deletion_date: None,
            },
        );

        Ok(CreateSecretOutput::builder()
            .arn(arn)
            .name(request.name)
            .version_id(version_id)
            .build())
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueOutput, TaskError> {
        let mut state = self.lock();
        state.calls.push("GetSecretValue");

        let secret = state.find(&request.secret_id).ok_or_else(not_found)?;
        if secret.deletion_date.is_some() {
            return Err(marked_for_deletion());
        }

        let index = match (&request.version_id, &request.version_stage) {
            (Some(version_id), _) => secret
                .versions
                .iter()
                .position(|v| &v.version_id == version_id)
                .ok_or_else(not_found)?,
            (None, Some(stage)) if stage == AWS_CURRENT => secret.current,
            (None, Some(stage)) if stage == AWS_PREVIOUS => {
                secret.previous.ok_or_else(not_found)?
            }
            (None, Some(_)) => return Err(not_found()),
            (None, None) => secret.current,
        };

        let version = &secret.versions[index];
        let mut stages = Vec::new();
        if index == secret.current {
            stages.push(AWS_CURRENT.to_string());
        }
        if secret.previous == Some(index) {
            stages.push(AWS_PREVIOUS.to_string());
        }
        let (secret_string, secret_binary) = slots(&version.value);

        Ok(GetSecretValueOutput::builder()
            .arn(secret.arn.clone())
            .name(secret.name.clone())
            .version_id(version.version_id.clone())
            .set_secret_string(secret_string)
            .set_secret_binary(secret_binary)
            .set_version_stages(Some(stages))
            .created_date(smithy_date(now()))
            .build())
    }

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<UpdateSecretOutput, TaskError> {
        let mut state = self.lock();
        state.calls.push("UpdateSecret");

        let secret = state.find_mut(&request.secret_id).ok_or_else(not_found)?;
        if secret.deletion_date.is_some() {
            return Err(marked_for_deletion());
        }

        if request.description.is_some() {
            secret.description = request.description;
        }
        let version = new_version(request.value);
        let version_id = version.version_id.clone();
        secret.versions.push(version);
        secret.previous = Some(secret.current);
        secret.current = secret.versions.len() - 1;

        Ok(UpdateSecretOutput::builder()
            .arn(secret.arn.clone())
            .name(secret.name.clone())
            .version_id(version_id)
            .build())
    }

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretOutput, TaskError> {
        let mut state = self.lock();
        state.calls.push("DeleteSecret");

        let force = request.force_delete_without_recovery.unwrap_or(false);
        if force && request.recovery_window_in_days.is_some() {
            return Err(invalid_parameter(
                "You can't use ForceDeleteWithoutRecovery in conjunction with RecoveryWindowInDays.",
            ));
        }

        let (arn, name) = {
            let secret = state.find(&request.secret_id).ok_or_else(not_found)?;
            (secret.arn.clone(), secret.name.clone())
        };

        let deletion_date = if force {
            state.secrets.remove(&name);
            now()
        } else {
            let days = request.recovery_window_in_days.unwrap_or(30);
            if !(7..=30).contains(&days) {
                return Err(invalid_parameter(
                    "RecoveryWindowInDays value must be between 7 and 30 days (inclusive).",
                ));
            }
            let date = now() + chrono::Duration::days(days);
            if let Some(secret) = state.secrets.get_mut(&name) {
                secret.deletion_date = Some(smithy_date(date));
            }
            date
        };

        Ok(DeleteSecretOutput::builder()
            .arn(arn)
            .name(name)
            .deletion_date(smithy_date(deletion_date))
            .build())
    }

    fn region(&self) -> Option<&str> {
        Some(REGION)
    }
}

/// Credentials handing out clients of a shared in-memory service
#[derive(Debug, Default)]
pub struct InMemoryCredentials {
    manager: InMemorySecretsManager,
    clients_issued: AtomicUsize,
}

impl InMemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manager(&self) -> &InMemorySecretsManager {
        &self.manager
    }

    /// Number of clients acquired so far
    pub fn clients_issued(&self) -> usize {
        self.clients_issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretsManagerCredentials for InMemoryCredentials {
    type Client = InMemorySecretsManager;

    async fn secrets_manager_client(&self) -> Result<InMemorySecretsManager, TaskError> {
        self.clients_issued.fetch_add(1, Ordering::SeqCst);
        Ok(self.manager.clone())
    }
}
