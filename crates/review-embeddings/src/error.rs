//! Embedding error types.

use thiserror::Error;

/// Errors that can occur during embedding operations.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Transport-level failure talking to the embedding service
    #[error("Request failed: {0}")]
    Request(String),

    /// The embedding service did not answer within the configured timeout
    #[error("Embedding request timed out")]
    Timeout,

    /// The embedding service answered with a non-success status
    #[error("Embedding API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be understood
    #[error("Invalid response: {0}")]
    Response(String),

    /// A required credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<reqwest::Error> for EmbeddingError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            EmbeddingError::Timeout
        } else if e.is_decode() {
            EmbeddingError::Response(e.to_string())
        } else {
            EmbeddingError::Request(e.to_string())
        }
    }
}
