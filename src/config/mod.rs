//! # Configuration
//!
//! Task settings loaded from environment variables.

mod tasks;

pub use tasks::TaskConfig;
