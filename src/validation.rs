//! # Validation
//!
//! Client-side checks performed before a request is sent.

use crate::constants::{MAX_RECOVERY_WINDOW_DAYS, MIN_RECOVERY_WINDOW_DAYS};
use crate::error::{Result, TaskError};

/// Validate the recovery window for a scheduled deletion
///
/// Forced deletion bypasses recovery, so any window is accepted and ignored.
/// Otherwise the window must lie in `[7, 30]` days inclusive.
///
/// # Errors
///
/// Returns [`TaskError::InvalidRecoveryWindow`] when recovery is not bypassed
/// and the window is out of range.
pub fn validate_recovery_window(
    recovery_window_in_days: i64,
    force_delete_without_recovery: bool,
) -> Result<()> {
    if force_delete_without_recovery || is_valid_recovery_window(recovery_window_in_days) {
        Ok(())
    } else {
        Err(TaskError::InvalidRecoveryWindow {
            days: recovery_window_in_days,
        })
    }
}

#[must_use]
pub fn is_valid_recovery_window(days: i64) -> bool {
    (MIN_RECOVERY_WINDOW_DAYS..=MAX_RECOVERY_WINDOW_DAYS).contains(&days)
}
