//! In-memory semantic index over the FAQ collection.
//!
//! Built once from every entry's document text; read-only afterwards.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use review_embeddings::{Embedding, EmbeddingError, EmbeddingModel, ModelInfo};

use crate::error::RetrievalError;
use crate::store::FaqStore;

/// Nearest entry for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexHit {
    /// Position of the entry in the store
    pub position: usize,

    /// Cosine similarity with the query
    pub similarity: f32,
}

/// Embedding vectors for every FAQ entry, in store order.
pub struct SemanticIndex {
    model: Arc<dyn EmbeddingModel>,
    vectors: Vec<Embedding>,
}

impl SemanticIndex {
    /// Embed every entry of `store`.
    pub fn build(store: &FaqStore, model: Arc<dyn EmbeddingModel>) -> Result<Self, RetrievalError> {
        let documents: Vec<String> = store.entries().iter().map(|e| e.document_text()).collect();
        let refs: Vec<&str> = documents.iter().map(|d| d.as_str()).collect();

        let vectors = model.embed_batch(&refs)?;
        if vectors.len() != documents.len() {
            return Err(EmbeddingError::Response(format!(
                "expected {} document embeddings, got {}",
                documents.len(),
                vectors.len()
            ))
            .into());
        }

        info!(
            model = %model.info().name,
            entries = vectors.len(),
            "Built semantic FAQ index"
        );

        Ok(Self { model, vectors })
    }

    /// Find the entry most similar to `query`.
    ///
    /// Returns `Ok(None)` when the query carries no embedding signal.
    pub fn nearest(&self, query: &str) -> Result<Option<IndexHit>, EmbeddingError> {
        let query_vec = self.model.embed(query)?;
        if query_vec.is_zero() {
            return Ok(None);
        }

        let mut best: Option<IndexHit> = None;
        for (position, vector) in self.vectors.iter().enumerate() {
            let similarity = query_vec.cosine_similarity(vector);
            if best.map_or(true, |b| similarity > b.similarity) {
                best = Some(IndexHit {
                    position,
                    similarity,
                });
            }
        }

        debug!(hit = ?best, "Semantic lookup complete");
        Ok(best)
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True when nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Information about the embedding model
    pub fn model_info(&self) -> &ModelInfo {
        self.model.info()
    }
}

impl fmt::Debug for SemanticIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticIndex")
            .field("model", &self.model.info().name)
            .field("entries", &self.vectors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_embeddings::HashEmbedder;
    use review_types::FaqEntry;

    fn store() -> FaqStore {
        FaqStore::new(vec![
            FaqEntry::new("bug", "Crash on upload", "Update the app to fix upload crashes."),
            FaqEntry::new("complaint", "Billing", "Duplicate charges are refunded."),
            FaqEntry::new("feature request", "Dark mode", "Dark mode is on the roadmap."),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_and_lookup() {
        let index = SemanticIndex::build(&store(), Arc::new(HashEmbedder::new(256))).unwrap();
        assert_eq!(index.len(), 3);

        let hit = index.nearest("please add dark mode").unwrap().unwrap();
        assert_eq!(hit.position, 2);

        let hit = index.nearest("refund my duplicate charges").unwrap().unwrap();
        assert_eq!(hit.position, 1);
    }

    #[test]
    fn test_empty_signal_returns_none() {
        let index = SemanticIndex::build(&store(), Arc::new(HashEmbedder::new(64))).unwrap();
        assert!(index.nearest("").unwrap().is_none());
        assert!(index.nearest("?!").unwrap().is_none());
    }

    #[test]
    fn test_debug_shows_model() {
        let index = SemanticIndex::build(&store(), Arc::new(HashEmbedder::new(64))).unwrap();
        let debug = format!("{:?}", index);
        assert!(debug.contains("fnv-hash-64"));
        assert_eq!(index.model_info().dimension, 64);
    }
}
