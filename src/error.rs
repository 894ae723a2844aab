//! # Task Errors
//!
//! Two kinds of failure reach callers: a local validation error raised before
//! any request is sent, and the service error returned by Secrets Manager,
//! passed through without translation.

use crate::constants::{MAX_RECOVERY_WINDOW_DAYS, MIN_RECOVERY_WINDOW_DAYS};
use aws_sdk_secretsmanager::error::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(
        "Recovery window must be between {} and {} days, got {}",
        MIN_RECOVERY_WINDOW_DAYS,
        MAX_RECOVERY_WINDOW_DAYS,
        .days
    )]
    InvalidRecoveryWindow { days: i64 },

    #[error("Secret {secret_name} has no string or binary value")]
    MissingSecretValue { secret_name: String },

    #[error(transparent)]
    Service(#[from] aws_sdk_secretsmanager::Error),
}

impl TaskError {
    /// True for errors raised locally before contacting the service
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::InvalidRecoveryWindow { .. })
    }

    /// True when the service reported that the secret does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TaskError::Service(aws_sdk_secretsmanager::Error::ResourceNotFoundException(_))
        )
    }

    /// True when the service reported that the secret name is taken
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            TaskError::Service(aws_sdk_secretsmanager::Error::ResourceExistsException(_))
        )
    }
}

/// Collapse an operation-level `SdkError` into the service error enum
pub(crate) fn from_sdk<E, R>(err: SdkError<E, R>) -> TaskError
where
    aws_sdk_secretsmanager::Error: From<SdkError<E, R>>,
{
    TaskError::Service(aws_sdk_secretsmanager::Error::from(err))
}

pub type Result<T, E = TaskError> = std::result::Result<T, E>;
