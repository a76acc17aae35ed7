//! Feature-hashing embedder.
//!
//! Maps each lower-cased alphanumeric token to a bucket with FNV-1a and
//! counts occurrences, then normalizes. No model files, no network, and the
//! same text always yields the same vector.

use tracing::debug;

use crate::error::EmbeddingError;
use crate::model::{Embedding, EmbeddingModel, ModelInfo};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Smallest accepted dimension.
const MIN_DIMENSION: usize = 8;

/// Local, deterministic embedder.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    info: ModelInfo,
}

impl HashEmbedder {
    /// Create a hash embedder with the given dimension (at least 8).
    pub fn new(dimension: usize) -> Self {
        let dimension = dimension.max(MIN_DIMENSION);
        Self {
            info: ModelInfo {
                name: format!("fnv-hash-{}", dimension),
                dimension,
                remote: false,
            },
        }
    }

    fn bucket(&self, token: &str) -> usize {
        let mut h = FNV_OFFSET;
        for b in token.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(FNV_PRIME);
        }
        (h % self.info.dimension as u64) as usize
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(384)
    }
}

impl EmbeddingModel for HashEmbedder {
    fn info(&self) -> &ModelInfo {
        &self.info
    }

    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let mut values = vec![0.0f32; self.info.dimension];
        let lowered = text.to_lowercase();

        let mut tokens = 0usize;
        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            values[self.bucket(token)] += 1.0;
            tokens += 1;
        }

        debug!(tokens, dimension = self.info.dimension, "Hashed text");
        Ok(Embedding::new(values))
    }
}
