//! Secrets Manager Tasks Library
//!
//! Task-level wrappers around AWS Secrets Manager: create, read, update and
//! delete a secret. Each task maps a few parameters onto one service call and
//! hands the service response back to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use secrets_manager_tasks::prelude::*;
//!
//! # async fn run() -> Result<(), TaskError> {
//! let credentials = AwsCredentials::from_env().with_region("us-east-1");
//!
//! create_secret("db-password", "hunter2", &credentials, CreateSecretOptions::default()).await?;
//! let value = read_secret("db-password", &credentials, ReadSecretOptions::default()).await?;
//! assert_eq!(value.as_text(), Some("hunter2"));
//!
//! delete_secret(
//!     "db-password",
//!     &credentials,
//!     DeleteSecretOptions::default().with_recovery_window(7),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod secret;
pub mod tasks;
pub mod validation;

pub use error::TaskError;
pub use secret::SecretValue;
pub use tasks::{create_secret, delete_secret, read_secret, update_secret};
