//! # review-types
//!
//! Shared domain types for the review responder.
//!
//! This crate defines the records that flow through the pipeline:
//! - Reviews: customer reviews as fetched from a store
//! - FAQ entries: canned answers tagged with a category
//! - Categories: the closed set of review categories
//! - Quality scores and review results
//! - Settings: layered configuration
//!
//! ## Usage
//!
//! ```rust
//! use review_types::{Category, Review};
//!
//! let review = Review::new("r-1", "The app keeps crashing").with_rating(2);
//! assert_eq!(review.rating, Some(2));
//! assert_eq!(Category::default(), Category::Complaint);
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod faq;
pub mod result;
pub mod review;
pub mod score;

pub use category::Category;
pub use config::{EmbeddingProviderKind, EvaluationSettings, RetrievalSettings, Settings};
pub use error::ReviewError;
pub use faq::FaqEntry;
pub use result::ReviewResult;
pub use review::Review;
pub use score::{EvaluationMode, QualityScore};
