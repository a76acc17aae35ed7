//! Stage hooks for the review pipeline.
//!
//! An observer is passed to the pipeline at construction and sees every
//! stage of every invocation. Observers must not fail the pipeline.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use review_types::ReviewResult;

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Category classification
    Classify,
    /// FAQ retrieval
    Retrieve,
    /// Reply synthesis
    Respond,
    /// Quality scoring (skipped when evaluation is disabled)
    Evaluate,
}

impl Stage {
    /// Returns the name of this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Classify => "classify",
            Stage::Retrieve => "retrieve",
            Stage::Respond => "respond",
            Stage::Evaluate => "evaluate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hooks invoked by the pipeline.
///
/// All methods default to doing nothing.
pub trait PipelineObserver: Send + Sync {
    /// A stage finished for the review with `review_id`.
    fn on_stage(&self, _review_id: &str, _stage: Stage, _elapsed: Duration) {}

    /// All stages finished and a result was produced.
    fn on_complete(&self, _result: &ReviewResult, _elapsed: Duration) {}

    /// The review failed validation; no stage ran.
    fn on_rejected(&self, _review_id: &str, _reason: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage(&self, review_id: &str, stage: Stage, elapsed: Duration) {
        debug!(
            review_id,
            stage = stage.as_str(),
            elapsed_us = elapsed.as_micros() as u64,
            "Pipeline stage complete"
        );
    }

    fn on_complete(&self, result: &ReviewResult, elapsed: Duration) {
        info!(
            review_id = %result.review.id,
            category = result.category.as_str(),
            faq_title = %result.faq_entry.title,
            helpfulness = result.score.as_ref().map(|s| s.helpfulness),
            elapsed_ms = elapsed.as_millis() as u64,
            "Review processed"
        );
    }

    fn on_rejected(&self, review_id: &str, reason: &str) {
        warn!(review_id, reason, "Review rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Classify.to_string(), "classify");
        assert_eq!(Stage::Evaluate.as_str(), "evaluate");
        assert_eq!(serde_json::to_string(&Stage::Retrieve).unwrap(), "\"retrieve\"");
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let observer: Box<dyn PipelineObserver> = Box::new(NoopObserver);
        observer.on_stage("r-1", Stage::Respond, Duration::from_millis(1));
        observer.on_rejected("r-1", "blank text");
    }
}
