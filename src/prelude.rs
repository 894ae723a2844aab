//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use secrets_manager_tasks::prelude::*;
//! ```
//!
//! This brings into scope:
//! - The four tasks and their option types
//! - Credentials and the provider traits
//! - Secret values and the task error type

pub use crate::config::TaskConfig;
pub use crate::error::TaskError;
pub use crate::provider::aws::{AwsCredentials, AwsSecretsManager};
pub use crate::provider::{SecretTag, SecretsManagerApi, SecretsManagerCredentials};
pub use crate::secret::SecretValue;
pub use crate::tasks::{
    create_secret, delete_secret, deletion_date_utc, read_secret, update_secret,
    CreateSecretOptions, DeleteSecretOptions, ReadSecretOptions, UpdateSecretOptions,
};
