use super::{run_task, Operation};
use crate::error::Result;
use crate::provider::{SecretsManagerApi, SecretsManagerCredentials, UpdateSecretRequest};
use crate::secret::SecretValue;
use aws_sdk_secretsmanager::operation::update_secret::UpdateSecretOutput;
use tracing::info;

/// Optional `UpdateSecret` parameters
#[derive(Debug, Clone, Default)]
pub struct UpdateSecretOptions {
    pub description: Option<String>,
}

/// Store a new value for an existing secret
///
/// The service assigns a new version id, which is part of the returned
/// response.
///
/// # Errors
///
/// Service errors (for example `ResourceNotFoundException`) are returned
/// unchanged.
pub async fn update_secret<C>(
    secret_name: &str,
    secret_value: impl Into<SecretValue>,
    credentials: &C,
    options: UpdateSecretOptions,
) -> Result<UpdateSecretOutput>
where
    C: SecretsManagerCredentials + ?Sized,
{
    let request = UpdateSecretRequest {
        secret_id: secret_name.to_string(),
        value: secret_value.into(),
        description: options.description,
    };

    run_task(Operation::Update, secret_name, credentials, |client| async move {
        info!("Updating value for secret {}", request.secret_id);
        client.update_secret(request).await
    })
    .await
}
