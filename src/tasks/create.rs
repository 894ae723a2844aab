use super::{run_task, Operation};
use crate::error::Result;
use crate::provider::{CreateSecretRequest, SecretTag, SecretsManagerApi, SecretsManagerCredentials};
use crate::secret::SecretValue;
use aws_sdk_secretsmanager::operation::create_secret::CreateSecretOutput;
use tracing::info;

/// Optional `CreateSecret` parameters
#[derive(Debug, Clone, Default)]
pub struct CreateSecretOptions {
    pub description: Option<String>,
    pub tags: Vec<SecretTag>,
}

impl CreateSecretOptions {
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(SecretTag::new(key, value));
        self
    }
}

/// Create a new secret
///
/// The value goes into `SecretString` or `SecretBinary` depending on its form.
/// The service response is returned as is.
///
/// # Errors
///
/// Service errors (for example `ResourceExistsException` when the name is
/// taken) are returned unchanged.
pub async fn create_secret<C>(
    secret_name: &str,
    secret_value: impl Into<SecretValue>,
    credentials: &C,
    options: CreateSecretOptions,
) -> Result<CreateSecretOutput>
where
    C: SecretsManagerCredentials + ?Sized,
{
    let request = CreateSecretRequest {
        name: secret_name.to_string(),
        value: secret_value.into(),
        description: options.description,
        tags: options.tags,
    };

    run_task(Operation::Create, secret_name, credentials, |client| async move {
        info!(
            secret_name = %request.name,
            binary = request.value.is_binary(),
            "Creating secret {}",
            request.name
        );
        client.create_secret(request).await
    })
    .await
}
