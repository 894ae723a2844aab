//! # Constants
//!
//! Shared constants used throughout the tasks.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Default recovery window applied by `delete_secret` (days)
/// Overridable through `SECRETS_MANAGER_RECOVERY_WINDOW_DAYS`
pub const DEFAULT_RECOVERY_WINDOW_DAYS: i64 = 30;

/// Shortest recovery window AWS Secrets Manager accepts (days)
pub const MIN_RECOVERY_WINDOW_DAYS: i64 = 7;

/// Longest recovery window AWS Secrets Manager accepts (days)
pub const MAX_RECOVERY_WINDOW_DAYS: i64 = 30;

/// Staging label of the latest secret version
pub const AWS_CURRENT: &str = "AWSCURRENT";

/// Staging label of the version that was current before the latest update
pub const AWS_PREVIOUS: &str = "AWSPREVIOUS";

/// Provider label used in logs, spans and metrics
pub const PROVIDER_NAME: &str = "aws";
