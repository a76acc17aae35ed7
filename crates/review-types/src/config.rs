//! Configuration loading for the review responder.
//!
//! Layered config: defaults -> config file -> CLI config file -> env vars -> CLI flags.
//! The default config file lives at `<config dir>/review-responder/config.toml`.
//! Environment variables use the `REVIEW_` prefix with `__` between nested
//! keys, e.g. `REVIEW_RETRIEVAL__PROVIDER=hash`.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ReviewError;

/// Environment variable consulted when no embedding API key is configured.
pub const EMBEDDING_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable consulted when no scoring API key is configured.
pub const SCORING_API_KEY_ENV: &str = "HONEYHIVE_API_KEY";

/// Which embedding backend powers semantic FAQ lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum EmbeddingProviderKind {
    /// OpenAI-compatible embeddings endpoint (requires an API key)
    #[serde(rename = "openai")]
    #[default]
    OpenAi,
    /// Local feature-hashing embedder, no credential needed
    #[serde(rename = "hash")]
    Hash,
    /// Semantic lookup disabled
    #[serde(rename = "none")]
    None,
}

impl EmbeddingProviderKind {
    /// Returns the config name for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbeddingProviderKind::OpenAi => "openai",
            EmbeddingProviderKind::Hash => "hash",
            EmbeddingProviderKind::None => "none",
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalSettings {
    /// Try to build a semantic index at startup
    #[serde(default = "default_semantic_enabled")]
    pub semantic_enabled: bool,

    /// Embedding backend
    #[serde(default)]
    pub provider: EmbeddingProviderKind,

    /// Embedding model name
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// API base URL (for custom endpoints)
    #[serde(default = "default_embedding_base_url")]
    pub base_url: String,

    /// API key (normally supplied through OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout for embedding calls (ms)
    #[serde(default = "default_embedding_timeout")]
    pub timeout_ms: u64,

    /// Vector size for the hash embedder
    #[serde(default = "default_hash_dimension")]
    pub hash_dimension: usize,
}

fn default_semantic_enabled() -> bool {
    true
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_embedding_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_embedding_timeout() -> u64 {
    5000
}

fn default_hash_dimension() -> usize {
    384
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            semantic_enabled: default_semantic_enabled(),
            provider: EmbeddingProviderKind::default(),
            model: default_embedding_model(),
            base_url: default_embedding_base_url(),
            api_key: None,
            timeout_ms: default_embedding_timeout(),
            hash_dimension: default_hash_dimension(),
        }
    }
}

impl RetrievalSettings {
    /// API key from config, falling back to `OPENAI_API_KEY`.
    ///
    /// Blank values count as absent.
    pub fn resolved_api_key(&self) -> Option<String> {
        non_blank(self.api_key.clone())
            .or_else(|| non_blank(std::env::var(EMBEDDING_API_KEY_ENV).ok()))
    }
}

/// Evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSettings {
    /// Score generated replies
    #[serde(default = "default_evaluation_enabled")]
    pub enabled: bool,

    /// Project name reported with scores
    #[serde(default = "default_evaluation_project")]
    pub project: String,

    /// Scoring service API key (normally supplied through HONEYHIVE_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_evaluation_enabled() -> bool {
    true
}

fn default_evaluation_project() -> String {
    "App-Review-Responder".to_string()
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            enabled: default_evaluation_enabled(),
            project: default_evaluation_project(),
            api_key: None,
        }
    }
}

impl EvaluationSettings {
    /// API key from config, falling back to `HONEYHIVE_API_KEY`.
    pub fn resolved_api_key(&self) -> Option<String> {
        non_blank(self.api_key.clone())
            .or_else(|| non_blank(std::env::var(SCORING_API_KEY_ENV).ok()))
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path to a JSON FAQ collection; the built-in collection is used when absent
    #[serde(default)]
    pub faq_path: Option<String>,

    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalSettings,

    /// Evaluation configuration
    #[serde(default)]
    pub evaluation: EvaluationSettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            faq_path: None,
            retrieval: RetrievalSettings::default(),
            evaluation: EvaluationSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (<config dir>/review-responder/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (REVIEW_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, ReviewError> {
        let config_dir = ProjectDirs::from("", "", "review-responder")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .set_default("retrieval.semantic_enabled", default_semantic_enabled())
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .set_default("retrieval.model", default_embedding_model())
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .set_default("retrieval.base_url", default_embedding_base_url())
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .set_default("retrieval.timeout_ms", default_embedding_timeout() as i64)
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .set_default("retrieval.hash_dimension", default_hash_dimension() as i64)
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .set_default("evaluation.enabled", default_evaluation_enabled())
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .set_default("evaluation.project", default_evaluation_project())
            .map_err(|e| ReviewError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("REVIEW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ReviewError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ReviewError::Config(e.to_string()))?;

        settings.validate().map_err(ReviewError::Config)?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.retrieval.timeout_ms == 0 {
            return Err("retrieval.timeout_ms must be > 0".to_string());
        }
        if self.retrieval.hash_dimension == 0 {
            return Err("retrieval.hash_dimension must be > 0".to_string());
        }
        if self.retrieval.model.trim().is_empty() {
            return Err("retrieval.model must not be empty".to_string());
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
