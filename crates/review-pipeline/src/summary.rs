//! Batch score summary.

use serde::{Deserialize, Serialize};

use review_types::{QualityScore, ReviewResult};

/// Mean of each score dimension over the scored results of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Number of scored results
    pub count: usize,
    pub correctness: f32,
    pub relevance: f32,
    pub tone: f32,
    pub clarity: f32,
    pub helpfulness: f32,
}

impl ScoreSummary {
    /// Average the scores that are present; `None` when nothing was scored.
    pub fn from_scores<'a>(scores: impl IntoIterator<Item = &'a QualityScore>) -> Option<Self> {
        let mut summary = Self {
            count: 0,
            correctness: 0.0,
            relevance: 0.0,
            tone: 0.0,
            clarity: 0.0,
            helpfulness: 0.0,
        };

        for score in scores {
            summary.count += 1;
            summary.correctness += score.correctness;
            summary.relevance += score.relevance;
            summary.tone += score.tone;
            summary.clarity += score.clarity;
            summary.helpfulness += score.helpfulness;
        }

        if summary.count == 0 {
            return None;
        }

        let n = summary.count as f32;
        summary.correctness /= n;
        summary.relevance /= n;
        summary.tone /= n;
        summary.clarity /= n;
        summary.helpfulness /= n;
        Some(summary)
    }

    /// Average the scores carried by `results`.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ReviewResult>) -> Option<Self> {
        Self::from_scores(results.into_iter().filter_map(|r| r.score.as_ref()))
    }
}
