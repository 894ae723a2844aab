//! # Secret Tasks
//!
//! The four task entry points: [`create_secret`], [`read_secret`],
//! [`update_secret`] and [`delete_secret`].
//!
//! Each task is an independent unit of work suitable for scheduling by an
//! orchestration layer. A task acquires a client from the supplied
//! credentials, issues exactly one request, and drops the client on return.
//! No retries, caching or local state; errors reach the caller as they came.

use crate::config::TaskConfig;
use crate::constants::PROVIDER_NAME;
use crate::error::Result;
use crate::observability::metrics;
use crate::provider::{SecretsManagerApi, SecretsManagerCredentials};
use std::future::Future;
use std::time::Instant;
use tracing::field::{display, Empty};
use tracing::{error, info_span, Instrument};

mod create;
mod delete;
mod read;
mod update;

pub use create::{create_secret, CreateSecretOptions};
pub use delete::{deletion_date_utc, delete_secret, DeleteSecretOptions};
pub use read::{read_secret, ReadSecretOptions};
pub use update::{update_secret, UpdateSecretOptions};

/// Task kind, used as the span and metric label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Run one task invocation inside its own span
///
/// Acquires a client, hands it to `call`, and records duration, outcome and
/// metrics. The client is owned by `call` and dropped when it finishes.
pub(crate) async fn run_task<C, T, F, Fut>(
    operation: Operation,
    secret_name: &str,
    credentials: &C,
    call: F,
) -> Result<T>
where
    C: SecretsManagerCredentials + ?Sized,
    F: FnOnce(C::Client) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let span = info_span!(
        "secrets_manager.task",
        provider = PROVIDER_NAME,
        operation = operation.as_str(),
        secret.name = secret_name,
        region = Empty,
        operation.success = Empty,
        operation.duration_ms = Empty,
        error.message = Empty,
    );
    let span_clone = span.clone();
    let start = Instant::now();

    async move {
        let result = match credentials.secrets_manager_client().await {
            Ok(client) => {
                if let Some(region) = client.region() {
                    span_clone.record("region", region);
                }
                call(client).await
            }
            Err(e) => Err(e),
        };

        let elapsed = start.elapsed();
        span_clone.record(
            "operation.duration_ms",
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        );
        let enable_metrics = TaskConfig::shared().enable_metrics;

        match &result {
            Ok(_) => {
                span_clone.record("operation.success", true);
                if enable_metrics {
                    metrics::record_secret_operation(operation.as_str(), elapsed.as_secs_f64());
                }
            }
            Err(e) => {
                span_clone.record("operation.success", false);
                span_clone.record("error.message", display(e));
                if enable_metrics {
                    metrics::increment_operation_errors(operation.as_str());
                }
                error!(
                    operation = operation.as_str(),
                    secret_name = secret_name,
                    error = %e,
                    "Secrets Manager {} failed for secret {}",
                    operation.as_str(),
                    secret_name
                );
            }
        }

        result
    }
    .instrument(span)
    .await
}
