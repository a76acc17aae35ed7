//! Heuristic reply quality scoring.
//!
//! Scores are computed locally from the review, the reply and the matched
//! FAQ entry. A configured scoring credential only switches the evaluation
//! mode (and with it the provenance note); the numbers are identical.

use secrecy::SecretString;
use tracing::{debug, info};
use ulid::Ulid;

use review_types::{EvaluationMode, EvaluationSettings, FaqEntry, QualityScore};

/// Review terms whose presence the reply should address.
const CONCERN_KEYWORDS: [&str; 7] = ["crash", "bug", "slow", "feature", "love", "great", "billing"];

/// Terms that make a reply read as empathetic.
const EMPATHY_WORDS: [&str; 5] = ["sorry", "thank", "appreciate", "understand", "listening"];

const BASE_CORRECTNESS: f32 = 0.7;
const BASE_RELEVANCE: f32 = 0.8;
const BASE_TONE: f32 = 0.6;
const BASE_CLARITY: f32 = 0.8;

/// Word counts that read as a well-sized reply.
const CLEAR_WORD_RANGE: std::ops::RangeInclusive<usize> = 20..=100;

/// Word count above which a reply is too long.
const VERBOSE_WORD_COUNT: usize = 150;

/// Scores generated replies.
pub struct QualityEvaluator {
    project: String,
    session_id: Ulid,
    credential: Option<SecretString>,
}

impl QualityEvaluator {
    /// Create an evaluator for `project`; live mode when a credential is given.
    pub fn new(project: impl Into<String>, credential: Option<SecretString>) -> Self {
        let evaluator = Self {
            project: project.into(),
            session_id: Ulid::new(),
            credential,
        };
        info!(
            project = %evaluator.project,
            session_id = %evaluator.session_id,
            mode = evaluator.mode().as_str(),
            "Quality evaluator ready"
        );
        evaluator
    }

    /// Create an evaluator from settings, resolving the scoring credential.
    pub fn from_settings(settings: &EvaluationSettings) -> Self {
        Self::new(
            settings.project.clone(),
            settings.resolved_api_key().map(SecretString::from),
        )
    }

    /// Live when a scoring credential is configured, else mock.
    pub fn mode(&self) -> EvaluationMode {
        if self.credential.is_some() {
            EvaluationMode::Live
        } else {
            EvaluationMode::Mock
        }
    }

    /// Project name reported with scores.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Identifier shared by every score from this evaluator.
    pub fn session_id(&self) -> Ulid {
        self.session_id
    }

    /// Score a reply. Total: every value lies in [0.0, 1.0].
    pub fn score(
        &self,
        review_text: &str,
        response_text: &str,
        faq_entry: &FaqEntry,
    ) -> QualityScore {
        let review_lower = review_text.to_lowercase();
        let response_lower = response_text.to_lowercase();

        let matched: Vec<&str> = CONCERN_KEYWORDS
            .iter()
            .copied()
            .filter(|k| review_lower.contains(k))
            .collect();

        let correctness = correctness(&matched, &response_lower, &faq_entry.body.to_lowercase());
        let relevance = relevance(&matched, &faq_entry.title.to_lowercase());
        let tone = tone(response_text, &response_lower);
        let clarity = clarity(response_text);

        let score =
            QualityScore::from_parts(correctness, relevance, tone, clarity, self.mode().notes());

        debug!(
            session_id = %self.session_id,
            correctness = score.correctness,
            relevance = score.relevance,
            tone = score.tone,
            clarity = score.clarity,
            helpfulness = score.helpfulness,
            "Scored reply"
        );
        score
    }
}

impl std::fmt::Debug for QualityEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityEvaluator")
            .field("project", &self.project)
            .field("session_id", &self.session_id)
            .field("mode", &self.mode())
            .finish()
    }
}

fn correctness(matched: &[&str], response_lower: &str, body_lower: &str) -> f32 {
    if matched.is_empty() {
        return BASE_CORRECTNESS;
    }
    let addressed = matched
        .iter()
        .filter(|k| response_lower.contains(*k) || body_lower.contains(*k))
        .count();
    let fraction = addressed as f32 / matched.len() as f32;
    (0.5 + fraction * 0.5).min(1.0)
}

fn relevance(matched: &[&str], title_lower: &str) -> f32 {
    if !title_lower.is_empty() && matched.iter().any(|k| title_lower.contains(k)) {
        1.0
    } else {
        BASE_RELEVANCE
    }
}

fn tone(response_text: &str, response_lower: &str) -> f32 {
    let mut tone = BASE_TONE;
    if EMPATHY_WORDS.iter().any(|w| response_lower.contains(w)) {
        tone += 0.3;
    }
    if response_text.contains('!') {
        tone += 0.1;
    }
    tone.min(1.0)
}

fn clarity(response_text: &str) -> f32 {
    let words = response_text.split_whitespace().count();
    if CLEAR_WORD_RANGE.contains(&words) {
        1.0
    } else if words > VERBOSE_WORD_COUNT {
        0.5
    } else {
        BASE_CLARITY
    }
}
