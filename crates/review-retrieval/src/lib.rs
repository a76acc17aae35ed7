//! # review-retrieval
//!
//! Review classification and FAQ retrieval for the review responder.
//!
//! ## Core Concepts
//!
//! - **Category classification**: keyword counting over an ordered table;
//!   earlier categories win ties, no hits means `complaint`
//! - **FAQ store**: non-empty, read-only collection shared by retrievers
//! - **Semantic capability**: detected once from settings; without it the
//!   retriever is keyword-only for its whole lifetime
//! - **Per-call fallback**: a semantic retriever answers any failed lookup
//!   with keyword scoring and logs a warning
//!
//! ## Usage
//!
//! ```rust
//! use review_retrieval::{CategoryClassifier, FaqRetriever, FaqStore};
//! use review_types::Category;
//!
//! let classifier = CategoryClassifier::new();
//! let category = classifier.classify("The app keeps crashing on upload");
//! assert_eq!(category, Category::Bug);
//!
//! let retriever = FaqRetriever::keyword(FaqStore::builtin().unwrap());
//! let entry = retriever.retrieve("The app keeps crashing on upload", Some(category));
//! assert_eq!(entry.category, "bug");
//! ```
//!
//! ## Modules
//!
//! - [`classifier`]: keyword-count category classification
//! - [`store`]: FAQ collection loading
//! - [`keyword`]: deterministic keyword scoring
//! - [`index`]: embedding index over FAQ entries
//! - [`capability`]: semantic capability detection
//! - [`retriever`]: strategy selection and fallback

pub mod capability;
pub mod classifier;
pub mod error;
pub mod index;
pub mod keyword;
pub mod retriever;
pub mod store;

// Re-export main types at crate root
pub use capability::SemanticCapability;
pub use classifier::{CategoryClassifier, CategoryKeywords, ClassificationResult, ClassifierConfig};
pub use error::RetrievalError;
pub use index::{IndexHit, SemanticIndex};
pub use keyword::{KeywordConfig, KeywordMatch, KeywordRetriever};
pub use retriever::{FaqRetriever, RetrievalMatch, RetrievalStrategy, SemanticRetriever};
pub use store::FaqStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::capability::SemanticCapability;
    pub use crate::classifier::{CategoryClassifier, ClassificationResult};
    pub use crate::retriever::{FaqRetriever, RetrievalMatch, RetrievalStrategy};
    pub use crate::store::FaqStore;
}
