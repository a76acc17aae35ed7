//! Pipeline error types.

use thiserror::Error;

use review_retrieval::RetrievalError;
use review_types::ReviewError;

/// Errors surfaced by the review pipeline.
///
/// Processing a valid review never fails; only construction, review
/// validation, and review sources produce errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The review failed validation; no stage ran
    #[error("Invalid review: {0}")]
    InvalidReview(#[from] ReviewError),

    /// The FAQ collection or retriever could not be built
    #[error("Retrieval setup failed: {0}")]
    Retrieval(#[from] RetrievalError),

    /// A review source could not produce reviews
    #[error("Review source {source_name} failed: {error}")]
    Source {
        source_name: String,
        #[source]
        error: ReviewError,
    },
}
