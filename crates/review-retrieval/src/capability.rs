//! Semantic capability detection.
//!
//! Decides once, at startup, whether an embedding model is available for
//! semantic FAQ lookup. Detection never touches the network; a missing
//! credential or a disabled setting yields `Disabled` with a reason.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use review_embeddings::{ApiEmbedder, ApiEmbedderConfig, EmbeddingModel, HashEmbedder};
use review_types::{EmbeddingProviderKind, RetrievalSettings};

/// Whether semantic retrieval can be used, and with which model.
#[derive(Clone)]
pub enum SemanticCapability {
    /// An embedding model is ready
    Available(Arc<dyn EmbeddingModel>),
    /// Semantic retrieval is off; the reason is kept for status output
    Disabled(String),
}

impl SemanticCapability {
    /// Detect the capability from retrieval settings.
    pub fn detect(settings: &RetrievalSettings) -> Self {
        let capability = Self::probe(settings);
        match &capability {
            Self::Available(model) => info!(
                provider = settings.provider.as_str(),
                model = %model.info().name,
                "Semantic retrieval available"
            ),
            Self::Disabled(reason) => info!(
                provider = settings.provider.as_str(),
                reason = %reason,
                "Semantic retrieval disabled, using keyword scoring"
            ),
        }
        capability
    }

    fn probe(settings: &RetrievalSettings) -> Self {
        if !settings.semantic_enabled {
            return Self::Disabled("semantic retrieval disabled in settings".to_string());
        }

        match settings.provider {
            EmbeddingProviderKind::None => {
                Self::Disabled("embedding provider set to none".to_string())
            }
            EmbeddingProviderKind::Hash => {
                Self::Available(Arc::new(HashEmbedder::new(settings.hash_dimension)))
            }
            EmbeddingProviderKind::OpenAi => {
                let Some(api_key) = settings.resolved_api_key() else {
                    return Self::Disabled("no embedding API key configured".to_string());
                };

                let config = ApiEmbedderConfig::openai(api_key, settings.model.clone())
                    .with_base_url(settings.base_url.trim_end_matches('/'))
                    .with_timeout(Duration::from_millis(settings.timeout_ms));

                match ApiEmbedder::new(config) {
                    Ok(embedder) => Self::Available(Arc::new(embedder)),
                    Err(e) => {
                        warn!(error = %e, "Failed to create embedding client");
                        Self::Disabled(format!("embedding client unavailable: {}", e))
                    }
                }
            }
        }
    }

    /// Wrap an already-constructed model.
    pub fn from_model(model: Arc<dyn EmbeddingModel>) -> Self {
        Self::Available(model)
    }

    /// Check if a model is available.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Human-readable summary for status output.
    pub fn description(&self) -> String {
        match self {
            Self::Available(model) => {
                let info = model.info();
                format!(
                    "semantic ({}, {} dims, {})",
                    info.name,
                    info.dimension,
                    if info.remote { "remote" } else { "local" }
                )
            }
            Self::Disabled(reason) => format!("keyword only ({})", reason),
        }
    }
}

impl fmt::Debug for SemanticCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(model) => f
                .debug_tuple("Available")
                .field(&model.info().name)
                .finish(),
            Self::Disabled(reason) => f.debug_tuple("Disabled").field(reason).finish(),
        }
    }
}
