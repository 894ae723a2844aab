use super::{run_task, Operation};
use crate::config::TaskConfig;
use crate::error::Result;
use crate::observability::metrics;
use crate::provider::{DeleteSecretRequest, SecretsManagerApi, SecretsManagerCredentials};
use crate::validation::validate_recovery_window;
use aws_sdk_secretsmanager::operation::delete_secret::DeleteSecretOutput;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Deletion mode for `delete_secret`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSecretOptions {
    /// Days before the secret is permanently removed; ignored when forcing
    pub recovery_window_in_days: i64,
    /// Delete immediately with no recovery window
    pub force_delete_without_recovery: bool,
}

impl Default for DeleteSecretOptions {
    /// Recovery window from the process-wide [`TaskConfig`]
    fn default() -> Self {
        Self::from_config(TaskConfig::shared())
    }
}

impl DeleteSecretOptions {
    #[must_use]
    pub fn from_config(config: &TaskConfig) -> Self {
        Self {
            recovery_window_in_days: config.default_recovery_window_days,
            force_delete_without_recovery: false,
        }
    }

    #[must_use]
    pub fn with_recovery_window(mut self, recovery_window_in_days: i64) -> Self {
        self.recovery_window_in_days = recovery_window_in_days;
        self
    }

    #[must_use]
    pub fn force(mut self, force_delete_without_recovery: bool) -> Self {
        self.force_delete_without_recovery = force_delete_without_recovery;
        self
    }

    fn into_request(self, secret_id: String) -> DeleteSecretRequest {
        if self.force_delete_without_recovery {
            DeleteSecretRequest {
                secret_id,
                recovery_window_in_days: None,
                force_delete_without_recovery: Some(true),
            }
        } else {
            DeleteSecretRequest {
                secret_id,
                recovery_window_in_days: Some(self.recovery_window_in_days),
                force_delete_without_recovery: None,
            }
        }
    }
}

/// Delete a secret, either after a recovery window or immediately
///
/// The recovery window is checked before anything is sent: unless deletion is
/// forced it must lie in `[7, 30]` days.
///
/// # Errors
///
/// [`crate::TaskError::InvalidRecoveryWindow`] for an out-of-range window, with
/// no request sent. Service errors are returned unchanged.
pub async fn delete_secret<C>(
    secret_name: &str,
    credentials: &C,
    options: DeleteSecretOptions,
) -> Result<DeleteSecretOutput>
where
    C: SecretsManagerCredentials + ?Sized,
{
    if let Err(e) = validate_recovery_window(
        options.recovery_window_in_days,
        options.force_delete_without_recovery,
    ) {
        warn!(
            secret_name = secret_name,
            recovery_window_in_days = options.recovery_window_in_days,
            "Refusing to delete secret {}: {}",
            secret_name,
            e
        );
        if TaskConfig::shared().enable_metrics {
            metrics::increment_recovery_window_rejections();
        }
        return Err(e);
    }

    let request = options.into_request(secret_name.to_string());

    run_task(Operation::Delete, secret_name, credentials, |client| async move {
        match request.recovery_window_in_days {
            Some(days) => info!(
                "Scheduling deletion of secret {} in {} days",
                request.secret_id, days
            ),
            None => info!(
                "Deleting secret {} immediately without recovery",
                request.secret_id
            ),
        }
        client.delete_secret(request).await
    })
    .await
}

/// `DeletionDate` of a delete response as a UTC timestamp
#[must_use]
pub fn deletion_date_utc(output: &DeleteSecretOutput) -> Option<DateTime<Utc>> {
    output
        .deletion_date()
        .and_then(|date| DateTime::from_timestamp(date.secs(), date.subsec_nanos()))
}
