//! End-to-end test infrastructure for the review responder.
//!
//! Provides a shared TestHarness for fixture files plus embedding doubles
//! used to exercise the semantic path and its fallbacks.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;
use serde_json::json;
use wiremock::{Request, Respond, ResponseTemplate};

use review_embeddings::{Embedding, EmbeddingError, EmbeddingModel, HashEmbedder, ModelInfo};
use review_types::{EmbeddingProviderKind, FaqEntry, Settings};

/// Shared test harness for E2E tests.
///
/// Owns a temp directory for FAQ and review fixture files.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Root of the temp directory
    pub root: PathBuf,
}

impl TestHarness {
    /// Create a new test harness with an empty temp directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write `contents` to `name` inside the harness directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Write FAQ entries as a JSON array.
    pub fn write_faq(&self, entries: &[FaqEntry]) -> PathBuf {
        let json = serde_json::to_string_pretty(entries).expect("Failed to serialize FAQ");
        self.write_file("faq.json", &json)
    }

    /// Settings pointing at `faq_path` with semantic lookup disabled.
    pub fn keyword_settings(&self, faq_path: &std::path::Path) -> Settings {
        let mut settings = Settings::default();
        settings.faq_path = Some(faq_path.to_string_lossy().into_owned());
        settings.retrieval.semantic_enabled = false;
        settings
    }

    /// Settings pointing at `faq_path` using the local hash embedder.
    pub fn hash_settings(&self, faq_path: &std::path::Path) -> Settings {
        let mut settings = self.keyword_settings(faq_path);
        settings.retrieval.semantic_enabled = true;
        settings.retrieval.provider = EmbeddingProviderKind::Hash;
        settings
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A small FAQ collection covering every category.
pub fn sample_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "bug",
            "Crash when uploading",
            "Update to the latest version to stop upload crashes.",
        ),
        FaqEntry::new(
            "feature request",
            "Dark mode",
            "Dark mode is on the roadmap for next quarter.",
        ),
        FaqEntry::new("praise", "Thank you", "We love hearing from happy users."),
        FaqEntry::new(
            "complaint",
            "Billing questions",
            "Duplicate charges are refunded within a week.",
        ),
    ]
}

/// Embedding model that indexes normally but fails every query.
pub struct FailingQueryModel {
    inner: HashEmbedder,
    info: ModelInfo,
    /// Number of query calls attempted
    pub query_calls: AtomicUsize,
}

impl FailingQueryModel {
    pub fn new() -> Self {
        Self {
            inner: HashEmbedder::new(128),
            info: ModelInfo {
                name: "failing-query".to_string(),
                dimension: 128,
                remote: true,
            },
            query_calls: AtomicUsize::new(0),
        }
    }
}

impl Default for FailingQueryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingModel for FailingQueryModel {
    fn info(&self) -> &ModelInfo {
        &self.info
    }

    fn embed(&self, _text: &str) -> Result<Embedding, EmbeddingError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::Timeout)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        self.inner.embed_batch(texts)
    }
}

#[derive(Deserialize)]
struct EmbeddingsRequest {
    input: Vec<String>,
}

/// Mock `/embeddings` responder backed by the hash embedder.
///
/// Answers any batch size, so it can serve both index builds and queries.
pub struct HashEmbeddingResponder {
    embedder: HashEmbedder,
}

impl HashEmbeddingResponder {
    pub fn new(dimension: usize) -> Self {
        Self {
            embedder: HashEmbedder::new(dimension),
        }
    }
}

impl Respond for HashEmbeddingResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = request.body_json::<EmbeddingsRequest>() else {
            return ResponseTemplate::new(400);
        };

        let data: Vec<_> = body
            .input
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let values = self
                    .embedder
                    .embed(text)
                    .map(|e| e.values)
                    .unwrap_or_default();
                json!({ "embedding": values, "index": index })
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
    }
}
