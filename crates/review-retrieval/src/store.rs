//! Immutable FAQ collection.
//!
//! The store is loaded once and shared read-only between retrievers; cloning
//! is cheap (reference-counted).

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use review_types::FaqEntry;

use crate::error::RetrievalError;

/// FAQ collection compiled into the crate.
const BUILTIN_FAQ: &str = include_str!("../data/faq.json");

/// Non-empty, ordered, read-only FAQ collection.
#[derive(Debug, Clone)]
pub struct FaqStore {
    entries: Arc<[FaqEntry]>,
}

impl FaqStore {
    /// Create a store from entries. Fails on an empty collection.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self, RetrievalError> {
        if entries.is_empty() {
            return Err(RetrievalError::EmptyFaq);
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Parse a JSON array of `{category, title, body}` objects.
    pub fn from_json(json: &str) -> Result<Self, RetrievalError> {
        let entries: Vec<FaqEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a JSON FAQ file from disk.
    pub fn load(path: &Path) -> Result<Self, RetrievalError> {
        let json = std::fs::read_to_string(path).map_err(|source| RetrievalError::FaqRead {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), entries = store.len(), "Loaded FAQ collection");
        Ok(store)
    }

    /// The FAQ collection shipped with the crate.
    pub fn builtin() -> Result<Self, RetrievalError> {
        Self::from_json(BUILTIN_FAQ)
    }

    /// Load from `path` when given, else the built-in collection.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, RetrievalError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// All entries in collection order.
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// First entry; the keyword strategy's default choice.
    pub fn first(&self) -> &FaqEntry {
        // Non-empty by construction
        &self.entries[0]
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed store.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether `entry` is a member of this collection.
    pub fn contains(&self, entry: &FaqEntry) -> bool {
        self.entries.iter().any(|e| e == entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_collection_rejected() {
        assert!(matches!(FaqStore::new(vec![]), Err(RetrievalError::EmptyFaq)));
        assert!(matches!(FaqStore::from_json("[]"), Err(RetrievalError::EmptyFaq)));
    }

    #[test]
    fn test_builtin_collection_loads() {
        let store = FaqStore::builtin().unwrap();
        assert!(store.len() >= 4);
        for category in review_types::Category::ALL {
            assert!(
                store
                    .entries()
                    .iter()
                    .any(|e| category.matches_label(&e.category)),
                "built-in FAQ should cover {}",
                category
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"category": "bug", "title": "Crash", "body": "Update the app."}}]"#
        )
        .unwrap();

        let store = FaqStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.first().title, "Crash");
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = FaqStore::load(Path::new("/no/such/faq.json")).unwrap_err();
        assert!(err.to_string().contains("/no/such/faq.json"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            FaqStore::from_json("{not json"),
            Err(RetrievalError::FaqParse(_))
        ));
    }

    #[test]
    fn test_clone_shares_entries() {
        let store = FaqStore::builtin().unwrap();
        let clone = store.clone();
        assert!(std::ptr::eq(store.entries(), clone.entries()));
        assert!(store.contains(clone.first()));
    }
}
