//! Error path E2E tests for the review responder.
//!
//! Covers the failures that do surface: bad FAQ data at construction,
//! malformed reviews, unreadable review sources, and invalid settings.

use pretty_assertions::assert_eq;

use e2e_tests::{sample_faq, TestHarness};
use review_pipeline::{JsonFileReviewSource, PipelineError, ReviewPipeline};
use review_retrieval::{FaqRetriever, FaqStore, RetrievalError};
use review_types::{Review, ReviewError, Settings};

/// Empty FAQ collection is fatal at construction.
#[test]
fn test_empty_faq_file() {
    let harness = TestHarness::new();
    let faq_path = harness.write_file("faq.json", "[]");

    let err = ReviewPipeline::from_settings(&harness.keyword_settings(&faq_path))
        .err()
        .expect("empty FAQ must fail");
    assert!(matches!(
        err,
        PipelineError::Retrieval(RetrievalError::EmptyFaq)
    ));
    assert!(err.to_string().contains("empty"));
}

/// Missing and malformed FAQ files name the problem.
#[test]
fn test_bad_faq_files() {
    let harness = TestHarness::new();

    let missing = harness.root.join("missing.json");
    let err = ReviewPipeline::from_settings(&harness.keyword_settings(&missing))
        .err()
        .expect("missing FAQ must fail");
    assert!(matches!(
        err,
        PipelineError::Retrieval(RetrievalError::FaqRead { .. })
    ));
    assert!(err.to_string().contains("missing.json"));

    let malformed = harness.write_file("bad.json", r#"[{"category": "bug"}]"#);
    let err = FaqStore::load(&malformed).unwrap_err();
    assert!(matches!(err, RetrievalError::FaqParse(_)));
}

/// Blank text, missing text, and bad ratings fail only their own position.
#[test]
fn test_malformed_reviews_in_batch() {
    let harness = TestHarness::new();
    let path = harness.write_file(
        "reviews.json",
        r#"[
            {"id": "ok-1", "text": "The app will crash"},
            {"id": "no-text", "author": "Lee", "rating": 3},
            {"id": "blank", "text": "   "},
            {"id": "rating", "text": "Fine", "rating": "7"},
            {"id": "ok-2", "text": "Love it", "rating": "5"}
        ]"#,
    );

    let retriever = FaqRetriever::keyword(FaqStore::builtin().unwrap());
    let pipeline = ReviewPipeline::new(retriever, false);
    let outcomes = pipeline
        .process_source(&JsonFileReviewSource::new(&path), None)
        .unwrap();

    let ok: Vec<bool> = outcomes.iter().map(|o| o.is_ok()).collect();
    assert_eq!(ok, vec![true, false, false, false, true]);

    let messages: Vec<String> = outcomes
        .iter()
        .filter_map(|o| o.as_ref().err())
        .map(|e| e.to_string())
        .collect();
    assert!(messages[0].contains("no-text") && messages[0].contains("missing"));
    assert!(messages[1].contains("blank"));
    assert!(messages[2].contains("rating must be 1-5"));

    for outcome in &outcomes {
        if let Err(e) = outcome {
            assert!(matches!(e, PipelineError::InvalidReview(ReviewError::InvalidInput(_))));
        }
    }
}

/// Unreadable review files surface as source errors.
#[test]
fn test_review_source_errors() {
    let harness = TestHarness::new();
    let retriever = FaqRetriever::keyword(FaqStore::builtin().unwrap());
    let pipeline = ReviewPipeline::new(retriever, false);

    let missing = JsonFileReviewSource::new(harness.root.join("nope.json"));
    let err = pipeline.process_source(&missing, None).unwrap_err();
    match err {
        PipelineError::Source { source_name, error } => {
            assert_eq!(source_name, "json-file");
            assert!(matches!(error, ReviewError::NotFound(_)));
        }
        other => panic!("expected Source error, got {:?}", other),
    }

    let bad_rating = harness.write_file(
        "reviews.json",
        r#"[{"id": "x", "text": "ok", "rating": "five"}]"#,
    );
    let err = pipeline
        .process_source(&JsonFileReviewSource::new(&bad_rating), Some(10))
        .unwrap_err();
    assert!(err.to_string().contains("invalid rating"), "got: {}", err);
}

/// A valid review never fails, whatever FAQ it lands on.
#[test]
fn test_valid_reviews_never_fail() {
    let retriever = FaqRetriever::keyword(FaqStore::new(sample_faq()).unwrap());
    let pipeline = ReviewPipeline::new(retriever, true);

    let long = "word ".repeat(500);
    for text in ["x", "!!!", "crash bug slow lag", "☃ unicode only ☃", long.as_str()] {
        let result = pipeline.process(&Review::new("r", text)).unwrap();
        for (name, value) in result.score.unwrap().dimensions() {
            assert!((0.0..=1.0).contains(&value), "{} = {} for {:?}", name, value, text);
        }
    }
}

/// Invalid settings are rejected at load time.
#[test]
fn test_invalid_settings_file() {
    let harness = TestHarness::new();
    let path = harness.write_file("config.toml", "[retrieval]\ntimeout_ms = 0\n");

    let err = Settings::load(Some(path.to_str().unwrap())).unwrap_err();
    assert!(matches!(err, ReviewError::Config(_)));
    assert!(err.to_string().contains("timeout_ms"));
}
