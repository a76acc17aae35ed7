//! Review categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// Closed set of review categories.
///
/// Declaration order is the classifier's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    /// Crashes, freezes, errors
    #[serde(rename = "bug")]
    Bug,

    /// Requests for new functionality
    #[serde(rename = "feature request")]
    FeatureRequest,

    /// Positive feedback
    #[serde(rename = "praise")]
    Praise,

    /// Everything else, including reviews with no keyword signal
    #[serde(rename = "complaint")]
    #[default]
    Complaint,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Category; 4] = [
        Category::Bug,
        Category::FeatureRequest,
        Category::Praise,
        Category::Complaint,
    ];

    /// Returns the label used in FAQ data and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::FeatureRequest => "feature request",
            Category::Praise => "praise",
            Category::Complaint => "complaint",
        }
    }

    /// Check whether a free-form FAQ category label names this category.
    pub fn matches_label(&self, label: &str) -> bool {
        self.as_str() == label
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ReviewError::InvalidInput(format!("unknown category: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_complaint() {
        assert_eq!(Category::default(), Category::Complaint);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("bug".parse::<Category>().unwrap(), Category::Bug);
        assert_eq!(
            "Feature Request".parse::<Category>().unwrap(),
            Category::FeatureRequest
        );
        assert_eq!(
            "feature-request".parse::<Category>().unwrap(),
            Category::FeatureRequest
        );
        assert!("question".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::FeatureRequest).unwrap();
        assert_eq!(json, "\"feature request\"");

        let decoded: Category = serde_json::from_str("\"praise\"").unwrap();
        assert_eq!(decoded, Category::Praise);
    }
}
