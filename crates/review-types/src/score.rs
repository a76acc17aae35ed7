//! Quality score types.

use serde::{Deserialize, Serialize};

/// Whether scores come from a configured scoring service or the local mock.
///
/// The mode only changes the provenance note, never the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// A scoring credential is configured
    Live,
    /// No credential; heuristic scores only
    Mock,
}

impl EvaluationMode {
    /// Provenance note attached to every score in this mode.
    pub fn notes(&self) -> &'static str {
        match self {
            EvaluationMode::Live => {
                "Live evaluation: heuristic metrics calculated and reported to the scoring service."
            }
            EvaluationMode::Mock => {
                "Mock evaluation: scoring credential not configured, heuristic metrics only."
            }
        }
    }

    /// Returns the display name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::Live => "live",
            EvaluationMode::Mock => "mock",
        }
    }
}

/// Heuristic quality score for a generated reply.
///
/// Every numeric field lies in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Does the reply address the review's concerns
    pub correctness: f32,

    /// Was the right FAQ entry pulled
    pub relevance: f32,

    /// Empathy and friendliness
    pub tone: f32,

    /// Length and readability
    pub clarity: f32,

    /// Mean of the four scores above
    pub helpfulness: f32,

    /// Scoring provenance
    pub notes: String,
}

impl QualityScore {
    /// Build a score, deriving helpfulness as the mean of the other four.
    ///
    /// Each part is clamped to [0.0, 1.0].
    pub fn from_parts(
        correctness: f32,
        relevance: f32,
        tone: f32,
        clarity: f32,
        notes: impl Into<String>,
    ) -> Self {
        let correctness = correctness.clamp(0.0, 1.0);
        let relevance = relevance.clamp(0.0, 1.0);
        let tone = tone.clamp(0.0, 1.0);
        let clarity = clarity.clamp(0.0, 1.0);
        Self {
            correctness,
            relevance,
            tone,
            clarity,
            helpfulness: (correctness + relevance + tone + clarity) / 4.0,
            notes: notes.into(),
        }
    }

    /// All five numeric dimensions in a fixed order.
    pub fn dimensions(&self) -> [(&'static str, f32); 5] {
        [
            ("correctness", self.correctness),
            ("relevance", self.relevance),
            ("tone", self.tone),
            ("clarity", self.clarity),
            ("helpfulness", self.helpfulness),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpfulness_is_mean() {
        let score = QualityScore::from_parts(0.7, 0.8, 0.6, 0.8, "n");
        assert!((score.helpfulness - 0.725).abs() < 1e-6);
    }

    #[test]
    fn test_parts_are_clamped() {
        let score = QualityScore::from_parts(1.4, -0.2, 0.5, 2.0, "n");
        assert_eq!(score.correctness, 1.0);
        assert_eq!(score.relevance, 0.0);
        assert_eq!(score.tone, 0.5);
        assert_eq!(score.clarity, 1.0);
        assert!((score.helpfulness - 0.625).abs() < 1e-6);
    }

    #[test]
    fn test_notes_differ_by_mode() {
        assert_ne!(EvaluationMode::Live.notes(), EvaluationMode::Mock.notes());
        assert!(EvaluationMode::Mock.notes().starts_with("Mock evaluation"));
    }
}
