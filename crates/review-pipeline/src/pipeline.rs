//! Review pipeline orchestration.
//!
//! Each invocation runs `Classify -> Retrieve -> Respond -> Evaluate` for one
//! review and returns one [`ReviewResult`]. Invocations share no state; the
//! pipeline itself is read-only after construction and can be shared across
//! threads.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use review_retrieval::{CategoryClassifier, FaqRetriever, FaqStore, RetrievalStrategy};
use review_types::{EvaluationMode, Review, ReviewResult, Settings};

use crate::error::PipelineError;
use crate::evaluator::QualityEvaluator;
use crate::observer::{NoopObserver, PipelineObserver, Stage, TracingObserver};
use crate::responder::generate_response;
use crate::source::ReviewSource;

/// Outcome for one review of a batch.
pub type BatchOutcome = Result<ReviewResult, PipelineError>;

/// Builder for [`ReviewPipeline`].
pub struct ReviewPipelineBuilder {
    retriever: FaqRetriever,
    classifier: CategoryClassifier,
    evaluator: Option<QualityEvaluator>,
    observer: Arc<dyn PipelineObserver>,
}

impl ReviewPipelineBuilder {
    /// Use a custom classifier.
    pub fn with_classifier(mut self, classifier: CategoryClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Score replies with `evaluator`.
    pub fn with_evaluator(mut self, evaluator: QualityEvaluator) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Skip the evaluate stage; results carry no score.
    pub fn without_evaluation(mut self) -> Self {
        self.evaluator = None;
        self
    }

    /// Receive stage events.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build the pipeline.
    pub fn build(self) -> ReviewPipeline {
        info!(
            strategy = self.retriever.strategy().as_str(),
            faq_entries = self.retriever.store().len(),
            evaluation = self.evaluator.as_ref().map(|e| e.mode().as_str()).unwrap_or("disabled"),
            "Review pipeline ready"
        );
        ReviewPipeline {
            classifier: self.classifier,
            retriever: self.retriever,
            evaluator: self.evaluator,
            observer: self.observer,
        }
    }
}

/// Classify, retrieve, respond, and optionally evaluate.
pub struct ReviewPipeline {
    classifier: CategoryClassifier,
    retriever: FaqRetriever,
    evaluator: Option<QualityEvaluator>,
    observer: Arc<dyn PipelineObserver>,
}

impl ReviewPipeline {
    /// Start building a pipeline around `retriever`.
    ///
    /// Defaults: keyword table classifier, no evaluation, no-op observer.
    pub fn builder(retriever: FaqRetriever) -> ReviewPipelineBuilder {
        ReviewPipelineBuilder {
            retriever,
            classifier: CategoryClassifier::new(),
            evaluator: None,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Build a pipeline with evaluation on or off.
    ///
    /// The evaluator resolves its credential from the environment.
    pub fn new(retriever: FaqRetriever, enable_evaluation: bool) -> Self {
        let builder = Self::builder(retriever);
        if enable_evaluation {
            let evaluator = QualityEvaluator::from_settings(&Default::default());
            builder.with_evaluator(evaluator).build()
        } else {
            builder.build()
        }
    }

    /// Build everything from settings: FAQ store, retriever, evaluator, and
    /// a tracing observer.
    ///
    /// Fails only when the FAQ collection cannot be loaded or is empty.
    pub fn from_settings(settings: &Settings) -> Result<Self, PipelineError> {
        let store = FaqStore::load_or_builtin(settings.faq_path.as_deref().map(Path::new))?;
        let retriever = FaqRetriever::from_settings(store, &settings.retrieval);

        let mut builder = Self::builder(retriever).with_observer(Arc::new(TracingObserver));
        if settings.evaluation.enabled {
            builder = builder.with_evaluator(QualityEvaluator::from_settings(&settings.evaluation));
        }
        Ok(builder.build())
    }

    /// Process one review.
    ///
    /// Fails only when the review has missing or blank text or an
    /// out-of-range rating.
    pub fn process(&self, review: &Review) -> Result<ReviewResult, PipelineError> {
        let started = Instant::now();

        let text = match review.validate() {
            Ok(text) => text,
            Err(e) => {
                self.observer.on_rejected(&review.id, &e.to_string());
                return Err(e.into());
            }
        };

        let stage_start = Instant::now();
        let category = self.classifier.classify(text);
        self.observer
            .on_stage(&review.id, Stage::Classify, stage_start.elapsed());

        let stage_start = Instant::now();
        let faq_entry = self.retriever.retrieve(text, Some(category));
        self.observer
            .on_stage(&review.id, Stage::Retrieve, stage_start.elapsed());

        let stage_start = Instant::now();
        let response = generate_response(review, category, faq_entry);
        self.observer
            .on_stage(&review.id, Stage::Respond, stage_start.elapsed());

        let score = self.evaluator.as_ref().map(|evaluator| {
            let stage_start = Instant::now();
            let score = evaluator.score(text, &response, faq_entry);
            self.observer
                .on_stage(&review.id, Stage::Evaluate, stage_start.elapsed());
            score
        });

        let result = ReviewResult {
            review: review.clone(),
            category,
            faq_entry: faq_entry.clone(),
            response,
            score,
        };

        self.observer.on_complete(&result, started.elapsed());
        Ok(result)
    }

    /// Process reviews in order; one outcome per input, at the same position.
    pub fn process_batch(&self, reviews: &[Review]) -> Vec<BatchOutcome> {
        reviews.iter().map(|review| self.process(review)).collect()
    }

    /// Fetch from `source` and process every review.
    pub fn process_source(
        &self,
        source: &dyn ReviewSource,
        max_reviews: Option<usize>,
    ) -> Result<Vec<BatchOutcome>, PipelineError> {
        let reviews = source
            .fetch(max_reviews)
            .map_err(|error| PipelineError::Source {
                source_name: source.name().to_string(),
                error,
            })?;
        Ok(self.process_batch(&reviews))
    }

    /// Strategy the retriever settled on at construction.
    pub fn retrieval_strategy(&self) -> RetrievalStrategy {
        self.retriever.strategy()
    }

    /// Evaluation mode, `None` when evaluation is disabled.
    pub fn evaluation_mode(&self) -> Option<EvaluationMode> {
        self.evaluator.as_ref().map(|e| e.mode())
    }

    /// The evaluator, when evaluation is enabled.
    pub fn evaluator(&self) -> Option<&QualityEvaluator> {
        self.evaluator.as_ref()
    }

    /// The retriever.
    pub fn retriever(&self) -> &FaqRetriever {
        &self.retriever
    }

    /// The classifier.
    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }
}
