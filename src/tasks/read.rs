use super::{run_task, Operation};
use crate::error::{Result, TaskError};
use crate::provider::{GetSecretValueRequest, SecretsManagerApi, SecretsManagerCredentials};
use crate::secret::SecretValue;
use tracing::info;

/// Version selectors for `read_secret`
///
/// With neither set, the current version is returned.
#[derive(Debug, Clone, Default)]
pub struct ReadSecretOptions {
    pub version_id: Option<String>,
    pub version_stage: Option<String>,
}

impl ReadSecretOptions {
    #[must_use]
    pub fn version_id(version_id: impl Into<String>) -> Self {
        Self {
            version_id: Some(version_id.into()),
            version_stage: None,
        }
    }

    #[must_use]
    pub fn version_stage(version_stage: impl Into<String>) -> Self {
        Self {
            version_id: None,
            version_stage: Some(version_stage.into()),
        }
    }
}

/// Read a secret value
///
/// Returns whichever of `SecretString` / `SecretBinary` is populated, not the
/// full response.
///
/// # Errors
///
/// Service errors (not found, access denied) are returned unchanged.
/// [`TaskError::MissingSecretValue`] if the response carries no payload.
pub async fn read_secret<C>(
    secret_name: &str,
    credentials: &C,
    options: ReadSecretOptions,
) -> Result<SecretValue>
where
    C: SecretsManagerCredentials + ?Sized,
{
    let request = GetSecretValueRequest {
        secret_id: secret_name.to_string(),
        version_id: options.version_id,
        version_stage: options.version_stage,
    };

    run_task(Operation::Read, secret_name, credentials, |client| async move {
        info!("Getting value for secret {}", request.secret_id);
        let secret_id = request.secret_id.clone();
        let response = client.get_secret_value(request).await?;

        SecretValue::from_slots(response.secret_string(), response.secret_binary())
            .ok_or(TaskError::MissingSecretValue {
                secret_name: secret_id,
            })
    })
    .await
}
