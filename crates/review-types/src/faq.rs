//! FAQ entry type.

use serde::{Deserialize, Serialize};

/// A canned answer tagged with a category.
///
/// Entries are loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Category label (normally one of the `Category` labels)
    pub category: String,

    /// Short title
    pub title: String,

    /// Answer text quoted into replies
    pub body: String,
}

impl FaqEntry {
    /// Create a new FAQ entry
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Text used when indexing this entry for semantic lookup.
    pub fn document_text(&self) -> String {
        format!(
            "Category: {}\nTitle: {}\nAnswer: {}",
            self.category, self.title, self.body
        )
    }
}
