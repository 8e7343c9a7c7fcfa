//! Error types for the preference store.

use thiserror::Error;

/// Result type for preference operations
pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Preference store errors
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// A lock was poisoned by a panicking writer
    #[error("Preference store lock poisoned")]
    LockPoisoned,
}
