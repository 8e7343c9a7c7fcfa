//! Error types for the listing store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Listing store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Seed file could not be read
    #[error("Failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not a JSON array of objects
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    /// A lock was poisoned by a panicking writer
    #[error("Listing store lock poisoned")]
    LockPoisoned,
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::InvalidSeed(err.to_string())
    }
}
