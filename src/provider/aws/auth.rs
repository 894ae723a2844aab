//! # AWS Secrets Manager Authentication
//!
//! Handles AWS SDK configuration and authentication setup.
//!
//! Credentials resolve in this order:
//! 1. Static access keys, when both the key id and the secret key are set
//! 2. A named profile from the shared config files
//! 3. The SDK default credential chain (environment, IRSA, instance metadata)

use super::AwsSecretsManager;
use crate::error::Result;
use crate::provider::SecretsManagerCredentials;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::Credentials;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

const CREDENTIALS_PROVIDER_NAME: &str = "secrets-manager-tasks";

/// Credential block used to build a Secrets Manager client
///
/// Can be deserialized from JSON/YAML. Key material is wiped on drop.
#[derive(Clone, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct AwsCredentials {
    #[zeroize(skip)]
    #[serde(alias = "region_name")]
    pub region: Option<String>,
    #[zeroize(skip)]
    pub profile_name: Option<String>,
    #[serde(alias = "aws_access_key_id")]
    pub access_key_id: Option<String>,
    #[serde(alias = "aws_secret_access_key")]
    pub secret_access_key: Option<String>,
    #[serde(alias = "aws_session_token")]
    pub session_token: Option<String>,
    /// Alternate service endpoint (LocalStack, mock servers)
    #[zeroize(skip)]
    pub endpoint_url: Option<String>,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("region", &self.region)
            .field("profile_name", &self.profile_name)
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl AwsCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read credentials from the standard AWS environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            region: lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")),
            profile_name: lookup("AWS_PROFILE"),
            access_key_id: lookup("AWS_ACCESS_KEY_ID"),
            secret_access_key: lookup("AWS_SECRET_ACCESS_KEY"),
            session_token: lookup("AWS_SESSION_TOKEN"),
            endpoint_url: lookup("AWS_ENDPOINT_URL_SECRETSMANAGER"),
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = Some(profile_name.into());
        self
    }

    #[must_use]
    pub fn with_static_keys(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    #[must_use]
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    fn static_credentials(&self) -> Option<Credentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(Credentials::new(
                access_key_id.clone(),
                secret_access_key.clone(),
                self.session_token.clone(),
                None,
                CREDENTIALS_PROVIDER_NAME,
            )),
            _ => None,
        }
    }

    /// Create AWS SDK config from this credential block
    pub async fn sdk_config(&self) -> SdkConfig {
        let mut builder = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &self.region {
            builder = builder.region(aws_config::Region::new(region.clone()));
        }

        if let Some(credentials) = self.static_credentials() {
            debug!("Using static access key credentials");
            builder = builder.credentials_provider(credentials);
        } else if let Some(profile_name) = &self.profile_name {
            debug!("Using AWS profile: {}", profile_name);
            builder = builder.profile_name(profile_name);
        } else {
            debug!("No explicit credentials configured, using the default credential chain");
        }

        if let Some(endpoint) = &self.endpoint_url {
            info!("Overriding Secrets Manager endpoint: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        builder.load().await
    }
}

#[async_trait]
impl SecretsManagerCredentials for AwsCredentials {
    type Client = AwsSecretsManager;

    async fn secrets_manager_client(&self) -> Result<AwsSecretsManager> {
        let sdk_config = self.sdk_config().await;
        Ok(AwsSecretsManager::new(&sdk_config))
    }
}
