//! # Task Configuration
//!
//! Task-level settings loaded from environment variables.

use crate::constants::DEFAULT_RECOVERY_WINDOW_DAYS;
use crate::validation::is_valid_recovery_window;
use std::sync::OnceLock;
use tracing::warn;

static SHARED_CONFIG: OnceLock<TaskConfig> = OnceLock::new();

/// Task-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfig {
    /// Recovery window used by `delete_secret` when the caller does not pick one (days)
    pub default_recovery_window_days: i64,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Enable color in text format logs
    pub log_enable_color: bool,
    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            default_recovery_window_days: DEFAULT_RECOVERY_WINDOW_DAYS,
            log_level: "INFO".to_string(),
            log_format: "text".to_string(),
            log_enable_color: false,
            enable_metrics: true,
        }
    }
}

impl TaskConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Process-wide configuration, loaded from the environment on first use
    pub fn shared() -> &'static TaskConfig {
        SHARED_CONFIG.get_or_init(Self::from_env)
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_recovery_window_days = match parse_or(
            &lookup,
            "SECRETS_MANAGER_RECOVERY_WINDOW_DAYS",
            defaults.default_recovery_window_days,
        ) {
            days if is_valid_recovery_window(days) => days,
            days => {
                warn!(
                    "SECRETS_MANAGER_RECOVERY_WINDOW_DAYS={} is outside 7..=30, using {}",
                    days, defaults.default_recovery_window_days
                );
                defaults.default_recovery_window_days
            }
        };

        Self {
            default_recovery_window_days,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT").unwrap_or(defaults.log_format),
            log_enable_color: bool_or(&lookup, "LOG_ENABLE_COLOR", defaults.log_enable_color),
            enable_metrics: bool_or(&lookup, "ENABLE_METRICS", defaults.enable_metrics),
        }
    }
}

/// Read a value and parse it, or return the default
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a value as boolean or return the default
fn bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| {
            let v_lower = v.to_lowercase();
            v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
        })
        .unwrap_or(default)
}
