//! Review sources.
//!
//! A source hands the pipeline an ordered list of reviews. Two sources are
//! provided: a static list (including the built-in demo set) and a JSON file
//! reader. Records are not validated here; the pipeline rejects malformed
//! reviews one at a time.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use tracing::{debug, info};

use review_types::{Review, ReviewError};

/// Scraped store reviews shipped with the crate.
const DEMO_REVIEWS: &str = include_str!("../data/demo_reviews.json");

/// Store tag for the synthetic stub reviews.
const STUB_STORE: &str = "google";

/// Anything that can produce reviews for the pipeline.
pub trait ReviewSource: Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Fetch up to `max_reviews` reviews (all when `None`), in source order.
    fn fetch(&self, max_reviews: Option<usize>) -> Result<Vec<Review>, ReviewError>;
}

fn truncate(mut reviews: Vec<Review>, max_reviews: Option<usize>) -> Vec<Review> {
    if let Some(max) = max_reviews {
        reviews.truncate(max);
    }
    reviews
}

/// Fixed in-memory list of reviews.
#[derive(Debug, Clone)]
pub struct StaticReviewSource {
    name: String,
    reviews: Vec<Review>,
}

impl StaticReviewSource {
    /// Wrap a list of reviews.
    pub fn new(name: impl Into<String>, reviews: Vec<Review>) -> Self {
        Self {
            name: name.into(),
            reviews,
        }
    }

    /// Synthetic stub reviews dated today, yesterday, and so on.
    pub fn stubs() -> Self {
        let today = Utc::now().date_naive();
        let samples = [
            (
                "Jamie",
                2,
                "The app keeps crashing whenever I try to upload a photo. Please fix this soon!",
            ),
            (
                "Lee",
                4,
                "Overall great experience but it takes forever to load the dashboard on older phones.",
            ),
            (
                "Morgan",
                5,
                "Love the latest update, thanks for listening to user feedback!",
            ),
            (
                "Riley",
                3,
                "Could you add a dark mode? It's hard to use at night without it.",
            ),
        ];

        let reviews = samples
            .iter()
            .enumerate()
            .map(|(idx, (author, rating, text))| {
                let date = today - Duration::days(idx as i64);
                Review::new(format!("stub-{}", idx), *text)
                    .with_author(*author)
                    .with_rating(*rating)
                    .with_date(date.format("%Y-%m-%d").to_string())
                    .with_store(STUB_STORE)
            })
            .collect();

        Self::new("stub", reviews)
    }

    /// Stub reviews followed by the scraped demo set.
    pub fn demo() -> Result<Self, ReviewError> {
        let mut reviews = Self::stubs().reviews;
        let scraped: Vec<Review> = serde_json::from_str(DEMO_REVIEWS)?;
        reviews.extend(scraped);
        Ok(Self::new("demo", reviews))
    }

    /// Number of reviews held
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// True when the list is empty
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl ReviewSource for StaticReviewSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, max_reviews: Option<usize>) -> Result<Vec<Review>, ReviewError> {
        let reviews = truncate(self.reviews.clone(), max_reviews);
        debug!(source = %self.name, count = reviews.len(), "Returning static reviews");
        Ok(reviews)
    }
}

/// Reviews read from a JSON array on disk.
///
/// Ratings may be numbers or numeric strings; records without text are
/// passed through and rejected later by the pipeline.
#[derive(Debug, Clone)]
pub struct JsonFileReviewSource {
    path: PathBuf,
}

impl JsonFileReviewSource {
    /// Read reviews from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReviewSource for JsonFileReviewSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch(&self, max_reviews: Option<usize>) -> Result<Vec<Review>, ReviewError> {
        if !self.path.exists() {
            return Err(ReviewError::NotFound(format!(
                "review file {}",
                self.path.display()
            )));
        }

        let json = std::fs::read_to_string(&self.path)?;
        let reviews: Vec<Review> = serde_json::from_str(&json)?;
        info!(path = %self.path.display(), count = reviews.len(), "Loaded reviews");
        Ok(truncate(reviews, max_reviews))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_stub_reviews() {
        let source = StaticReviewSource::stubs();
        let reviews = source.fetch(None).unwrap();
        assert_eq!(reviews.len(), 4);
        assert_eq!(reviews[0].id, "stub-0");
        assert_eq!(reviews[0].author.as_deref(), Some("Jamie"));
        assert_eq!(reviews[3].rating, Some(3));
        assert!(reviews.iter().all(|r| r.store == "google"));
        assert!(reviews.iter().all(|r| r.validate().is_ok()));
        assert!(reviews[0].date > reviews[1].date);
    }

    #[test]
    fn test_demo_includes_scraped_reviews() {
        let source = StaticReviewSource::demo().unwrap();
        assert_eq!(source.name(), "demo");
        assert_eq!(source.len(), 11);

        let reviews = source.fetch(None).unwrap();
        assert!(reviews.iter().any(|r| r.author.as_deref() == Some("MekaMia")));
        assert!(reviews.iter().all(|r| r.validate().is_ok()));
    }

    #[test]
    fn test_limit() {
        let source = StaticReviewSource::stubs();
        assert_eq!(source.fetch(Some(2)).unwrap().len(), 2);
        assert_eq!(source.fetch(Some(100)).unwrap().len(), 4);
        assert!(source.fetch(Some(0)).unwrap().is_empty());
    }

    #[test]
    fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "a", "author": "Jamie", "rating": "2", "text": "It crashes"}},
                {{"id": "b", "rating": "", "text": "Nice"}},
                {{"id": "c", "author": "Lee"}}
            ]"#
        )
        .unwrap();

        let source = JsonFileReviewSource::new(file.path());
        let reviews = source.fetch(None).unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].rating, Some(2));
        assert_eq!(reviews[1].rating, None);
        assert!(reviews[2].text.is_none());
    }

    #[test]
    fn test_json_file_missing() {
        let source = JsonFileReviewSource::new("/no/such/reviews.json");
        assert!(matches!(source.fetch(None), Err(ReviewError::NotFound(_))));
    }

    #[test]
    fn test_json_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let source = JsonFileReviewSource::new(file.path());
        assert!(matches!(source.fetch(None), Err(ReviewError::Serialization(_))));
    }
}
