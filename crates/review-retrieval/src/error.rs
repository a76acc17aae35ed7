//! Retrieval error types.

use thiserror::Error;

use review_embeddings::EmbeddingError;

/// Errors raised while building the FAQ store or retriever.
///
/// Per-query failures never surface as errors; they fall back to keyword
/// scoring inside the retriever.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The FAQ collection has no entries
    #[error("FAQ collection is empty; at least one entry is required")]
    EmptyFaq,

    /// FAQ file could not be read
    #[error("Failed to read FAQ file {path}: {source}")]
    FaqRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// FAQ data could not be parsed
    #[error("Failed to parse FAQ data: {0}")]
    FaqParse(#[from] serde_json::Error),

    /// Semantic index construction failed
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
}
