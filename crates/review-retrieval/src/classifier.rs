//! Review category classification.
//!
//! The `CategoryClassifier` counts keyword hits per category and picks the
//! category with the most hits. The keyword table is ordered: on equal
//! counts the earlier category keeps the win, and a review with no hits at
//! all falls back to the default category.

use serde::{Deserialize, Serialize};
use tracing::debug;

use review_types::Category;

/// Keywords associated with one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryKeywords {
    /// Category these keywords vote for
    pub category: Category,

    /// Lower-case substrings to look for
    pub keywords: Vec<String>,
}

impl CategoryKeywords {
    fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Configuration for category classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Keyword table, in tie-break order
    pub table: Vec<CategoryKeywords>,

    /// Category returned when nothing matches
    pub default_category: Category,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            table: vec![
                CategoryKeywords::new(
                    Category::Bug,
                    &["crash", "bug", "error", "freeze", "won't", "cant", "can't", "issue"],
                ),
                CategoryKeywords::new(
                    Category::FeatureRequest,
                    &["feature", "wish", "add", "could you", "dark mode", "missing"],
                ),
                CategoryKeywords::new(
                    Category::Praise,
                    &["love", "great", "amazing", "awesome", "thank", "favorite"],
                ),
                CategoryKeywords::new(
                    Category::Complaint,
                    &[
                        "slow",
                        "lag",
                        "bad",
                        "frustrated",
                        "billing",
                        "charge",
                        "annoying",
                        "unhappy",
                    ],
                ),
            ],
            default_category: Category::Complaint,
        }
    }
}

/// Result of classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The chosen category
    pub category: Category,

    /// Number of keywords that matched for the chosen category
    pub score: usize,

    /// Keywords that matched for the chosen category
    pub matched_keywords: Vec<String>,

    /// Explanation of why this category was chosen
    pub reason: String,
}

/// Keyword-count classifier.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    config: ClassifierConfig,
}

impl CategoryClassifier {
    /// Create a new classifier with the default keyword table.
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with a custom keyword table.
    ///
    /// Keywords are lower-cased so matching stays case-insensitive.
    pub fn with_config(mut config: ClassifierConfig) -> Self {
        for row in &mut config.table {
            for keyword in &mut row.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        Self { config }
    }

    /// Classify review text into a single category.
    pub fn classify(&self, text: &str) -> Category {
        self.classify_detailed(text).category
    }

    /// Classify and report the winning count and matched keywords.
    pub fn classify_detailed(&self, text: &str) -> ClassificationResult {
        let lowered = text.to_lowercase();

        let mut best: Option<(Category, Vec<String>)> = None;
        let mut best_score = 0usize;

        for row in &self.config.table {
            let matched: Vec<String> = row
                .keywords
                .iter()
                .filter(|k| lowered.contains(k.as_str()))
                .cloned()
                .collect();

            debug!(
                category = row.category.as_str(),
                score = matched.len(),
                "Category keyword count"
            );

            // Strictly greater: earlier rows win ties
            if matched.len() > best_score {
                best_score = matched.len();
                best = Some((row.category, matched));
            }
        }

        match best {
            Some((category, matched_keywords)) => ClassificationResult {
                category,
                score: best_score,
                reason: format!(
                    "{} matched keywords [{}]",
                    category,
                    matched_keywords.join(", ")
                ),
                matched_keywords,
            },
            None => ClassificationResult {
                category: self.config.default_category,
                score: 0,
                matched_keywords: Vec::new(),
                reason: format!(
                    "No keyword signal; defaulting to {}",
                    self.config.default_category
                ),
            },
        }
    }

    /// The keyword table in use.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_classify_bug() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.classify("App keeps crashing when uploading photos"),
            Category::Bug
        );

        let result = classifier.classify_detailed("The app won't open, some error every time");
        assert_eq!(result.category, Category::Bug);
        assert_eq!(result.score, 2);
        assert_eq!(result.matched_keywords, vec!["error", "won't"]);
    }

    #[test]
    fn test_classify_feature_request() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.classify("Could you add a dark mode? It's hard to use at night."),
            Category::FeatureRequest
        );
    }

    #[test]
    fn test_praise_beats_single_feature_hit() {
        let classifier = CategoryClassifier::new();
        let result = classifier.classify_detailed("Love this app, would be great with dark mode");

        // praise: love + great = 2, feature request: dark mode = 1
        assert_eq!(result.category, Category::Praise);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_classify_complaint() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.classify("They charge $20 and billing support is slow"),
            Category::Complaint
        );
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        let classifier = CategoryClassifier::new();

        // bug: "bug" = 1, praise: "love" = 1
        let result = classifier.classify_detailed("I love it but found a bug");
        assert_eq!(result.category, Category::Bug);

        // feature request: "wish" = 1, complaint: "slow" = 1
        assert_eq!(
            classifier.classify("I wish it were less slow"),
            Category::FeatureRequest
        );
    }

    #[test]
    fn test_no_keywords_defaults_to_complaint() {
        let classifier = CategoryClassifier::new();

        let result = classifier.classify_detailed("The best");
        assert_eq!(result.category, Category::Complaint);
        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());

        assert_eq!(classifier.classify(""), Category::Complaint);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify("CRASH after CRASH"), Category::Bug);
    }

    #[test]
    fn test_deterministic_on_random_input() {
        let classifier = CategoryClassifier::new();
        let mut rng = rand::rng();
        let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz '!".chars().collect();

        for _ in 0..200 {
            let len = rng.random_range(0..60);
            let text: String = (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            assert_eq!(classifier.classify(&text), classifier.classify(&text));
        }
    }

    #[test]
    fn test_keyword_free_text_defaults() {
        let classifier = CategoryClassifier::new();
        let mut rng = rand::rng();
        // No vowels other than 'y' means no keyword can appear
        let alphabet: Vec<char> = "bcdfghjkmnpqrstvwxyz ".chars().collect();

        for _ in 0..200 {
            let len = rng.random_range(0..40);
            let text: String = (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            assert_eq!(classifier.classify(&text), Category::Complaint, "text: {:?}", text);
        }
    }

    #[test]
    fn test_custom_config_lowercases_keywords() {
        let mut config = ClassifierConfig::default();
        config.table[2].keywords.push("Brilliant".to_string());

        let classifier = CategoryClassifier::with_config(config);
        assert_eq!(classifier.classify("brilliant work"), Category::Praise);
    }
}
