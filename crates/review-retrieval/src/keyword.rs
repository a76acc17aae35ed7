//! Deterministic keyword scoring over the FAQ collection.
//!
//! Always available and credential-free. Every entry is scored against the
//! query and the highest score wins; the first entry in the collection is
//! the initial best, so it also wins every tie.

use serde::{Deserialize, Serialize};
use tracing::debug;

use review_types::{Category, FaqEntry};

use crate::store::FaqStore;

/// Weights and vocabulary for keyword scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Domain terms that score when present in both query and entry
    pub vocabulary: Vec<String>,

    /// Bonus when the entry's category equals the requested one
    pub category_weight: f32,

    /// Bonus per shared vocabulary term
    pub vocabulary_weight: f32,

    /// Bonus when any title word appears in the query
    pub title_weight: f32,

    /// Bonus when any body word appears in the query
    pub body_weight: f32,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            vocabulary: [
                "crash", "bug", "slow", "lag", "feature", "request", "love", "thanks", "billing",
                "charge", "login", "password", "mode", "dark",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            category_weight: 5.0,
            vocabulary_weight: 2.0,
            title_weight: 1.0,
            body_weight: 0.5,
        }
    }
}

/// Best keyword match for a query.
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatch<'a> {
    /// Position of the entry in the store
    pub position: usize,

    /// The matched entry
    pub entry: &'a FaqEntry,

    /// Total keyword score
    pub score: f32,
}

/// Keyword retrieval strategy.
#[derive(Debug, Clone)]
pub struct KeywordRetriever {
    store: FaqStore,
    config: KeywordConfig,
}

impl KeywordRetriever {
    /// Create a keyword retriever with default weights.
    pub fn new(store: FaqStore) -> Self {
        Self::with_config(store, KeywordConfig::default())
    }

    /// Create a keyword retriever with custom weights.
    pub fn with_config(store: FaqStore, config: KeywordConfig) -> Self {
        Self { store, config }
    }

    /// The FAQ collection this retriever scores.
    pub fn store(&self) -> &FaqStore {
        &self.store
    }

    /// Score one entry against a lower-cased query.
    pub fn score_entry(
        &self,
        lowered_query: &str,
        category: Option<Category>,
        entry: &FaqEntry,
    ) -> f32 {
        let mut score = 0.0;

        if category.is_some_and(|c| c.matches_label(&entry.category)) {
            score += self.config.category_weight;
        }

        let title = entry.title.to_lowercase();
        let body = entry.body.to_lowercase();
        let haystack = format!("{}{}", title, body);

        for token in &self.config.vocabulary {
            if lowered_query.contains(token.as_str()) && haystack.contains(token.as_str()) {
                score += self.config.vocabulary_weight;
            }
        }

        if title.split_whitespace().any(|w| lowered_query.contains(w)) {
            score += self.config.title_weight;
        }
        if body.split_whitespace().any(|w| lowered_query.contains(w)) {
            score += self.config.body_weight;
        }

        score
    }

    /// Return the best-scoring entry. Total: always returns a member of the store.
    pub fn retrieve(&self, query: &str, category: Option<Category>) -> KeywordMatch<'_> {
        let lowered = query.to_lowercase();

        let mut best = KeywordMatch {
            position: 0,
            entry: self.store.first(),
            score: f32::NEG_INFINITY,
        };

        for (position, entry) in self.store.entries().iter().enumerate() {
            let score = self.score_entry(&lowered, category, entry);
            if score > best.score {
                best = KeywordMatch {
                    position,
                    entry,
                    score,
                };
            }
        }

        debug!(
            position = best.position,
            title = %best.entry.title,
            score = best.score,
            "Keyword retrieval selected entry"
        );
        best
    }
}
