//! FAQ retrieval with semantic lookup and keyword fallback.
//!
//! The strategy is fixed when the retriever is built:
//! - `Semantic` when an embedding model is available and the index built
//! - `Keyword` otherwise
//!
//! A semantic retriever still carries a keyword retriever; any per-call
//! embedding failure is logged and answered by keyword scoring instead.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use review_types::{Category, FaqEntry, RetrievalSettings};

use crate::capability::SemanticCapability;
use crate::error::RetrievalError;
use crate::index::SemanticIndex;
use crate::keyword::KeywordRetriever;
use crate::store::FaqStore;

/// Strategy that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStrategy {
    /// Nearest neighbour over embeddings
    Semantic,
    /// Deterministic keyword scoring
    Keyword,
}

impl RetrievalStrategy {
    /// Returns the name of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            RetrievalStrategy::Semantic => "semantic",
            RetrievalStrategy::Keyword => "keyword",
        }
    }
}

impl fmt::Display for RetrievalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detailed retrieval outcome.
#[derive(Debug, Clone)]
pub struct RetrievalMatch<'a> {
    /// Position of the entry in the store
    pub position: usize,

    /// The chosen entry
    pub entry: &'a FaqEntry,

    /// Strategy that chose the entry
    pub strategy: RetrievalStrategy,

    /// Cosine similarity (semantic) or keyword score
    pub score: f32,

    /// True when semantic lookup failed on this call and keyword scoring answered
    pub fell_back: bool,
}

/// Semantic index plus its keyword fallback.
#[derive(Debug)]
pub struct SemanticRetriever {
    index: SemanticIndex,
    fallback: KeywordRetriever,
}

impl SemanticRetriever {
    /// Pair a built index with the keyword retriever over the same store.
    pub fn new(index: SemanticIndex, fallback: KeywordRetriever) -> Self {
        Self { index, fallback }
    }

    /// The semantic index.
    pub fn index(&self) -> &SemanticIndex {
        &self.index
    }

    fn retrieve_match(&self, query: &str, category: Option<Category>) -> RetrievalMatch<'_> {
        let store = self.fallback.store();

        match self.index.nearest(query) {
            Ok(Some(hit)) => {
                if let Some(entry) = store.get(hit.position) {
                    debug!(
                        position = hit.position,
                        similarity = hit.similarity,
                        "Semantic retrieval selected entry"
                    );
                    return RetrievalMatch {
                        position: hit.position,
                        entry,
                        strategy: RetrievalStrategy::Semantic,
                        score: hit.similarity,
                        fell_back: false,
                    };
                }
                warn!(
                    position = hit.position,
                    "Semantic hit outside FAQ collection, using keyword scoring"
                );
            }
            Ok(None) => {
                warn!("Semantic lookup returned no result, using keyword scoring");
            }
            Err(e) => {
                warn!(error = %e, "Semantic lookup failed, using keyword scoring");
            }
        }

        let m = self.fallback.retrieve(query, category);
        RetrievalMatch {
            position: m.position,
            entry: m.entry,
            strategy: RetrievalStrategy::Keyword,
            score: m.score,
            fell_back: true,
        }
    }
}

/// FAQ retriever with a strategy chosen once at construction.
#[derive(Debug)]
pub enum FaqRetriever {
    /// Semantic lookup with per-call keyword fallback
    Semantic(SemanticRetriever),
    /// Keyword scoring only
    Keyword(KeywordRetriever),
}

impl FaqRetriever {
    /// Build a retriever, indexing the store when a model is available.
    ///
    /// An index build failure disables semantic lookup for this retriever.
    pub fn new(store: FaqStore, capability: SemanticCapability) -> Self {
        let keyword = KeywordRetriever::new(store);

        let model = match capability {
            SemanticCapability::Available(model) => model,
            SemanticCapability::Disabled(reason) => {
                debug!(reason = %reason, "Building keyword-only retriever");
                return Self::Keyword(keyword);
            }
        };

        match SemanticIndex::build(keyword.store(), model) {
            Ok(index) => Self::Semantic(SemanticRetriever::new(index, keyword)),
            Err(e) => {
                info!(error = %e, "Semantic index unavailable, using keyword scoring");
                Self::Keyword(keyword)
            }
        }
    }

    /// Keyword-only retriever.
    pub fn keyword(store: FaqStore) -> Self {
        Self::Keyword(KeywordRetriever::new(store))
    }

    /// Detect the capability from settings and build.
    pub fn from_settings(store: FaqStore, settings: &RetrievalSettings) -> Self {
        Self::new(store, SemanticCapability::detect(settings))
    }

    /// Build from raw entries. Fails on an empty collection.
    pub fn from_entries(
        entries: Vec<FaqEntry>,
        capability: SemanticCapability,
    ) -> Result<Self, RetrievalError> {
        Ok(Self::new(FaqStore::new(entries)?, capability))
    }

    /// Return the best FAQ entry for `query`. Always a member of the store.
    pub fn retrieve(&self, query: &str, category: Option<Category>) -> &FaqEntry {
        self.retrieve_match(query, category).entry
    }

    /// Return the best FAQ entry along with how it was found.
    pub fn retrieve_match(&self, query: &str, category: Option<Category>) -> RetrievalMatch<'_> {
        match self {
            Self::Semantic(semantic) => semantic.retrieve_match(query, category),
            Self::Keyword(keyword) => {
                let m = keyword.retrieve(query, category);
                RetrievalMatch {
                    position: m.position,
                    entry: m.entry,
                    strategy: RetrievalStrategy::Keyword,
                    score: m.score,
                    fell_back: false,
                }
            }
        }
    }

    /// Strategy chosen at construction.
    pub fn strategy(&self) -> RetrievalStrategy {
        match self {
            Self::Semantic(_) => RetrievalStrategy::Semantic,
            Self::Keyword(_) => RetrievalStrategy::Keyword,
        }
    }

    /// The FAQ collection.
    pub fn store(&self) -> &FaqStore {
        match self {
            Self::Semantic(semantic) => semantic.fallback.store(),
            Self::Keyword(keyword) => keyword.store(),
        }
    }
}
