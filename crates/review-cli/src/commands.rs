//! Command implementations.
//!
//! Human-readable and JSON output go to stdout; logs go to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use review_pipeline::{
    BatchOutcome, JsonFileReviewSource, QualityEvaluator, ReviewPipeline, ReviewSource,
    ScoreSummary, StaticReviewSource,
};
use review_retrieval::{CategoryClassifier, FaqRetriever, FaqStore, SemanticCapability};
use review_types::{Category, Review, ReviewResult, Settings};

/// Store tag for reviews typed on the command line.
const CLI_STORE: &str = "cli";

/// Review id for reviews typed on the command line.
const CLI_REVIEW_ID: &str = "api_request";

/// Load settings and apply CLI overrides (highest precedence).
pub fn load_settings(
    config_path: Option<&str>,
    log_level: Option<&str>,
    faq_path: Option<&str>,
    keyword_only: bool,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(log_level) = log_level {
        settings.log_level = log_level.to_string();
    }
    if let Some(faq_path) = faq_path {
        settings.faq_path = Some(faq_path.to_string());
    }
    if keyword_only {
        settings.retrieval.semantic_enabled = false;
    }

    Ok(settings)
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn build_pipeline(settings: &Settings, no_eval: bool) -> Result<ReviewPipeline> {
    let mut settings = settings.clone();
    if no_eval {
        settings.evaluation.enabled = false;
    }
    ReviewPipeline::from_settings(&settings).context("Failed to build review pipeline")
}

fn load_store(settings: &Settings) -> Result<FaqStore> {
    FaqStore::load_or_builtin(settings.faq_path.as_deref().map(Path::new))
        .context("Failed to load FAQ collection")
}

/// Process a single review typed on the command line.
pub fn handle_respond(
    settings: &Settings,
    text: &str,
    author: Option<&str>,
    rating: Option<u8>,
    no_eval: bool,
    json: bool,
) -> Result<()> {
    let pipeline = build_pipeline(settings, no_eval)?;
    let review = cli_review(text, author, rating);

    let result = pipeline
        .process(&review)
        .context("Failed to process review")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_result(&result));
    }
    Ok(())
}

/// Review record for text typed on the command line.
pub fn cli_review(text: &str, author: Option<&str>, rating: Option<u8>) -> Review {
    let mut review = Review::new(CLI_REVIEW_ID, text).with_store(CLI_STORE);
    if let Some(author) = author {
        review = review.with_author(author);
    }
    if let Some(rating) = rating {
        review = review.with_rating(rating);
    }
    review
}

/// Error entry in a batch report.
#[derive(Debug, Serialize)]
pub struct BatchError {
    /// Position of the review in the input
    pub index: usize,
    pub review_id: String,
    pub error: String,
}

/// Machine-readable batch output.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub source: String,
    pub results: Vec<ReviewResult>,
    pub errors: Vec<BatchError>,
    pub summary: Option<ScoreSummary>,
}

impl BatchReport {
    /// Split outcomes into results and errors, keeping input positions.
    pub fn from_outcomes(source: &str, reviews: &[Review], outcomes: Vec<BatchOutcome>) -> Self {
        let mut results = Vec::new();
        let mut errors = Vec::new();

        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => errors.push(BatchError {
                    index,
                    review_id: reviews.get(index).map(|r| r.id.clone()).unwrap_or_default(),
                    error: e.to_string(),
                }),
            }
        }

        let summary = ScoreSummary::from_results(&results);
        Self {
            source: source.to_string(),
            results,
            errors,
            summary,
        }
    }
}

/// Process every review from a JSON file or the built-in demo set.
pub fn handle_batch(
    settings: &Settings,
    input: Option<&str>,
    limit: Option<usize>,
    no_eval: bool,
    json: bool,
) -> Result<()> {
    let pipeline = build_pipeline(settings, no_eval)?;

    let source: Box<dyn ReviewSource> = match input {
        Some(path) => Box::new(JsonFileReviewSource::new(path)),
        None => Box::new(StaticReviewSource::demo().context("Failed to load demo reviews")?),
    };

    let reviews = source
        .fetch(limit)
        .with_context(|| format!("Failed to read reviews from {}", source.name()))?;
    info!(source = source.name(), count = reviews.len(), "Processing batch");

    let outcomes = pipeline.process_batch(&reviews);
    let report = BatchReport::from_outcomes(source.name(), &reviews, outcomes);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (i, result) in report.results.iter().enumerate() {
        println!("Review {}", i + 1);
        print!("{}", format_result(result));
        println!("{}", "-".repeat(50));
    }
    for error in &report.errors {
        println!(
            "Review #{} ({}) skipped: {}",
            error.index + 1,
            error.review_id,
            error.error
        );
    }
    println!(
        "Processed {} of {} reviews",
        report.results.len(),
        reviews.len()
    );
    if let Some(summary) = &report.summary {
        print!("{}", format_summary(summary));
    }
    Ok(())
}

/// Print the category for `text`.
pub fn handle_classify(text: &str) -> Result<()> {
    let result = CategoryClassifier::new().classify_detailed(text);
    println!("Category: {}", result.category);
    println!("Matched keywords: {}", result.score);
    if !result.matched_keywords.is_empty() {
        println!("Keywords: {}", result.matched_keywords.join(", "));
    }
    debug!(reason = %result.reason, "Classification");
    Ok(())
}

/// List FAQ entries.
pub fn handle_faq_list(settings: &Settings) -> Result<()> {
    let store = load_store(settings)?;
    for (i, entry) in store.entries().iter().enumerate() {
        println!("{:>2}. [{}] {}", i + 1, entry.category, entry.title);
    }
    println!("{} entries", store.len());
    Ok(())
}

/// Show the retriever's choice for a query.
pub fn handle_faq_search(settings: &Settings, query: &str, category: Option<&str>) -> Result<()> {
    let category = category
        .map(|c| c.parse::<Category>())
        .transpose()
        .context("Invalid --category")?;

    let retriever = FaqRetriever::from_settings(load_store(settings)?, &settings.retrieval);
    let m = retriever.retrieve_match(query, category);

    println!("Title: {}", m.entry.title);
    println!("Category: {}", m.entry.category);
    println!(
        "Strategy: {}{}",
        m.strategy,
        if m.fell_back { " (fallback)" } else { "" }
    );
    println!("Score: {:.3}", m.score);
    println!("Answer: {}", m.entry.body);
    Ok(())
}

/// Show how the pipeline would run with the current settings.
pub fn show_status(settings: &Settings) -> Result<()> {
    let store = load_store(settings)?;
    let capability = SemanticCapability::detect(&settings.retrieval);

    println!(
        "FAQ collection: {} entries ({})",
        store.len(),
        settings.faq_path.as_deref().unwrap_or("built-in")
    );
    println!("Embedding provider: {}", settings.retrieval.provider.as_str());
    println!("Semantic capability: {}", capability.description());

    let retriever = FaqRetriever::new(store, capability);
    println!("Retrieval strategy: {}", retriever.strategy());

    if settings.evaluation.enabled {
        let evaluator = QualityEvaluator::from_settings(&settings.evaluation);
        println!(
            "Evaluation: {} (project {}, session {})",
            evaluator.mode().as_str(),
            evaluator.project(),
            evaluator.session_id()
        );
    } else {
        println!("Evaluation: disabled");
    }
    Ok(())
}

/// Human-readable rendering of one result.
pub fn format_result(result: &ReviewResult) -> String {
    let review = &result.review;
    let mut out = String::new();

    let rating = review
        .rating
        .map(|r| format!(" ({} stars)", r))
        .unwrap_or_default();
    out.push_str(&format!("Author: {}{}\n", review.display_author(), rating));
    out.push_str(&format!(
        "Review: \"{}\"\n",
        review.text.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!("Category: {}\n", result.category));
    out.push_str(&format!("FAQ used: {}\n", result.faq_entry.title));
    out.push_str(&format!("Response: {}\n", result.response));

    if let Some(score) = &result.score {
        out.push_str("Scores:\n");
        for (name, value) in score.dimensions() {
            out.push_str(&format!("  {:<12} {:.2}\n", name, value));
        }
        out.push_str(&format!("  Notes: {}\n", score.notes));
    }
    out
}

/// Human-readable rendering of a batch summary.
pub fn format_summary(summary: &ScoreSummary) -> String {
    format!(
        "Average over {} scored reviews:\n  correctness  {:.2}\n  relevance    {:.2}\n  \
         tone         {:.2}\n  clarity      {:.2}\n  helpfulness  {:.2}\n",
        summary.count,
        summary.correctness,
        summary.relevance,
        summary.tone,
        summary.clarity,
        summary.helpfulness
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_types::{FaqEntry, QualityScore};

    fn result(score: Option<QualityScore>) -> ReviewResult {
        ReviewResult {
            review: Review::new("r-1", "It crashes").with_rating(2),
            category: Category::Bug,
            faq_entry: FaqEntry::new("bug", "Crash fixes", "Update the app."),
            response: "Hi there".to_string(),
            score,
        }
    }

    #[test]
    fn test_cli_review_ids() {
        let review = cli_review("It crashes", Some("Jamie"), Some(2));
        assert_eq!(review.id, "api_request");
        assert_eq!(review.store, "cli");
        assert_eq!(review.author.as_deref(), Some("Jamie"));
        assert_eq!(review.rating, Some(2));

        let review = cli_review("It crashes", None, None);
        assert_eq!(review.author, None);
        assert_eq!(review.rating, None);
    }

    #[test]
    fn test_format_result_without_score() {
        let out = format_result(&result(None));
        assert!(out.contains("Author: Anonymous (2 stars)"));
        assert!(out.contains("Category: bug"));
        assert!(out.contains("FAQ used: Crash fixes"));
        assert!(!out.contains("Scores:"));
    }

    #[test]
    fn test_format_result_with_score() {
        let score = QualityScore::from_parts(1.0, 1.0, 1.0, 1.0, "mock");
        let out = format_result(&result(Some(score)));
        assert!(out.contains("helpfulness  1.00"));
        assert!(out.contains("Notes: mock"));
    }

    #[test]
    fn test_batch_report_keeps_positions() {
        let reviews = vec![Review::new("a", "ok"), Review::new("b", " ")];
        let retriever = FaqRetriever::keyword(FaqStore::builtin().unwrap());
        let pipeline = ReviewPipeline::new(retriever, false);
        let outcomes = pipeline.process_batch(&reviews);

        let report = BatchReport::from_outcomes("test", &reviews, outcomes);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].index, 1);
        assert_eq!(report.errors[0].review_id, "b");
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_format_summary() {
        let scores = [QualityScore::from_parts(0.5, 0.5, 0.5, 0.5, "")];
        let summary = ScoreSummary::from_scores(&scores).unwrap();
        let out = format_summary(&summary);
        assert!(out.starts_with("Average over 1 scored reviews"));
        assert!(out.contains("tone         0.50"));
    }

    #[test]
    fn test_load_settings_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let settings = load_settings(
            Some(path.to_str().unwrap()),
            Some("debug"),
            Some("faq.json"),
            true,
        )
        .unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.faq_path.as_deref(), Some("faq.json"));
        assert!(!settings.retrieval.semantic_enabled);
    }
}
