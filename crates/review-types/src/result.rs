//! Pipeline result record.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::faq::FaqEntry;
use crate::review::Review;
use crate::score::QualityScore;

/// Outcome of processing one review.
///
/// Created once per pipeline run and handed to the caller for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResult {
    /// The review as received
    pub review: Review,

    /// Classified category
    pub category: Category,

    /// FAQ entry the reply is grounded on
    pub faq_entry: FaqEntry,

    /// Generated reply
    pub response: String,

    /// Quality score, absent when evaluation is disabled
    pub score: Option<QualityScore>,
}
