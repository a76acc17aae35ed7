//! Review record type.
//!
//! Reviews arrive from a review source (store scraper, fixture list, JSON
//! file) and are immutable once fetched. Only `text` is required, and that
//! requirement is enforced by [`Review::validate`] rather than at
//! deserialization time so that a malformed record surfaces as a validation
//! failure naming the field.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ReviewError;

/// Author name shown when a review carries none.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Valid star ratings.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Source identifier
    #[serde(default)]
    pub id: String,

    /// Author display name
    #[serde(default)]
    pub author: Option<String>,

    /// Star rating (1-5), absent when the store did not report one
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<u8>,

    /// Review body (required; see `validate`)
    #[serde(default)]
    pub text: Option<String>,

    /// Date string as reported by the source
    #[serde(default)]
    pub date: String,

    /// Source tag (e.g. "google", "apple", "api")
    #[serde(default)]
    pub store: String,
}

impl Review {
    /// Create a review with the given id and text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: None,
            rating: None,
            text: Some(text.into()),
            date: String::new(),
            store: String::new(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the store tag
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = store.into();
        self
    }

    /// Author name for display, "Anonymous" when absent or blank.
    pub fn display_author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(ANONYMOUS_AUTHOR)
    }

    /// Check the record is fit for the pipeline and return its text.
    ///
    /// Rejects a missing or blank `text` and a rating outside 1-5.
    pub fn validate(&self) -> Result<&str, ReviewError> {
        let text = match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            Some(_) => {
                return Err(ReviewError::InvalidInput(format!(
                    "review {}: text must not be blank",
                    self.id_for_errors()
                )))
            }
            None => {
                return Err(ReviewError::InvalidInput(format!(
                    "review {}: missing required field text",
                    self.id_for_errors()
                )))
            }
        };

        if let Some(rating) = self.rating {
            if !RATING_RANGE.contains(&rating) {
                return Err(ReviewError::InvalidInput(format!(
                    "review {}: rating must be 1-5, got {}",
                    self.id_for_errors(),
                    rating
                )));
            }
        }

        Ok(text)
    }

    fn id_for_errors(&self) -> &str {
        if self.id.is_empty() {
            "<no id>"
        } else {
            &self.id
        }
    }
}

/// Accept ratings as integers, numeric strings, empty strings, or null.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid rating: {}", n))),
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<u8>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid rating: {}", s)))
        }
        Some(other) => Err(D::Error::custom(format!("invalid rating: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let review = Review::new("r-1", "Great app")
            .with_author("Jamie")
            .with_rating(5)
            .with_date("2025-09-16")
            .with_store("apple");

        assert_eq!(review.display_author(), "Jamie");
        assert_eq!(review.rating, Some(5));
        assert_eq!(review.store, "apple");
        assert_eq!(review.validate().unwrap(), "Great app");
    }

    #[test]
    fn test_display_author_defaults_to_anonymous() {
        let review = Review::new("r-1", "text");
        assert_eq!(review.display_author(), ANONYMOUS_AUTHOR);

        let review = Review::new("r-1", "text").with_author("  ");
        assert_eq!(review.display_author(), ANONYMOUS_AUTHOR);
    }

    #[test]
    fn test_validate_rejects_missing_text() {
        let review: Review = serde_json::from_str(r#"{"id": "r-9", "author": "Lee"}"#).unwrap();
        let err = review.validate().unwrap_err();
        assert!(err.to_string().contains("text"), "got: {}", err);
        assert!(err.to_string().contains("r-9"), "got: {}", err);
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        let review = Review::new("r-1", "   ");
        assert!(matches!(
            review.validate(),
            Err(ReviewError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let review = Review::new("r-1", "ok").with_rating(0);
        assert!(review.validate().is_err());

        let review = Review::new("r-1", "ok").with_rating(6);
        assert!(review.validate().is_err());
    }

    #[test]
    fn test_rating_accepts_strings_and_numbers() {
        let review: Review = serde_json::from_str(r#"{"text": "x", "rating": "4"}"#).unwrap();
        assert_eq!(review.rating, Some(4));

        let review: Review = serde_json::from_str(r#"{"text": "x", "rating": 2}"#).unwrap();
        assert_eq!(review.rating, Some(2));

        let review: Review = serde_json::from_str(r#"{"text": "x", "rating": ""}"#).unwrap();
        assert_eq!(review.rating, None);

        let review: Review = serde_json::from_str(r#"{"text": "x", "rating": null}"#).unwrap();
        assert_eq!(review.rating, None);

        let review: Review = serde_json::from_str(r#"{"text": "x"}"#).unwrap();
        assert_eq!(review.rating, None);
    }

    #[test]
    fn test_rating_rejects_garbage() {
        let result = serde_json::from_str::<Review>(r#"{"text": "x", "rating": "five"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Review>(r#"{"text": "x", "rating": -1}"#);
        assert!(result.is_err());
    }
}
