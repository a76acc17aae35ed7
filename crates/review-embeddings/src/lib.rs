//! # review-embeddings
//!
//! Text embedding backends for semantic FAQ lookup.
//!
//! ## Backends
//! - [`HashEmbedder`]: local feature-hashing embedder, deterministic and
//!   credential-free
//! - [`ApiEmbedder`]: OpenAI-compatible `/embeddings` endpoint with a bounded
//!   request timeout and no retries
//!
//! Both implement [`EmbeddingModel`], which is synchronous and thread-safe so
//! a built index can be shared read-only between pipeline instances.

pub mod api;
pub mod error;
pub mod hash;
pub mod model;

pub use api::{ApiEmbedder, ApiEmbedderConfig, DEFAULT_API_DIMENSION};
pub use error::EmbeddingError;
pub use hash::HashEmbedder;
pub use model::{Embedding, EmbeddingModel, ModelInfo};
