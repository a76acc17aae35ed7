//! # review-pipeline
//!
//! Turns app store reviews into customer-service replies.
//!
//! Every review runs through the same fixed sequence:
//!
//! 1. **Classify**: keyword count over the category table
//! 2. **Retrieve**: semantic FAQ lookup, or keyword scoring as fallback
//! 3. **Respond**: templated reply built from the review and FAQ answer
//! 4. **Evaluate** (optional): heuristic quality scores in [0.0, 1.0]
//!
//! ## Usage
//!
//! ```rust
//! use review_pipeline::{QualityEvaluator, ReviewPipeline};
//! use review_retrieval::{FaqRetriever, FaqStore};
//! use review_types::{Category, Review};
//!
//! let retriever = FaqRetriever::keyword(FaqStore::builtin().unwrap());
//! let pipeline = ReviewPipeline::builder(retriever)
//!     .with_evaluator(QualityEvaluator::new("docs", None))
//!     .build();
//!
//! let review = Review::new("r-1", "Could you add a dark mode?").with_author("Riley");
//! let result = pipeline.process(&review).unwrap();
//! assert_eq!(result.category, Category::FeatureRequest);
//! assert!(result.response.starts_with("Hi Riley"));
//! assert!(result.score.is_some());
//! ```

pub mod error;
pub mod evaluator;
pub mod observer;
pub mod pipeline;
pub mod responder;
pub mod source;
pub mod summary;

pub use error::PipelineError;
pub use evaluator::QualityEvaluator;
pub use observer::{NoopObserver, PipelineObserver, Stage, TracingObserver};
pub use pipeline::{BatchOutcome, ReviewPipeline, ReviewPipelineBuilder};
pub use responder::generate_response;
pub use source::{JsonFileReviewSource, ReviewSource, StaticReviewSource};
pub use summary::ScoreSummary;
