//! CLI-specific error types
//!
//! Every CLI error is fatal: main prints it and exits non-zero.

use thiserror::Error;

use crate::listings::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed data could not be loaded
    #[error("Seed data error: {0}")]
    Store(#[from] StoreError),

    /// Server failed to boot or crashed
    #[error("Boot failed: {0}")]
    Boot(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::Boot(msg.into())
    }
}
