//! Error types for language-model delegation.

use thiserror::Error;

/// Result type for NLP operations
pub type NlpResult<T> = Result<T, NlpError>;

/// NLP delegation errors
#[derive(Debug, Error)]
pub enum NlpError {
    /// Transport-level failure talking to the model service
    #[error("Chat service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Chat service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered 200 but without usable content
    #[error("Chat service returned no completion")]
    EmptyCompletion,
}
