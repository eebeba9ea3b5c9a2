use super::EntryStore;
use crate::error::{Result, StrprobeError};
use crate::filter::FilterPredicate;
use crate::model::AnalyzedEntry;
use std::collections::HashMap;

/// In-memory storage for testing and throwaway sessions.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<String, AnalyzedEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for InMemoryStore {
    fn save(&mut self, entry: &AnalyzedEntry) -> Result<()> {
        if self.entries.contains_key(&entry.id) {
            return Err(StrprobeError::Duplicate(entry.id.clone()));
        }
        self.entries.insert(entry.id.clone(), entry.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<AnalyzedEntry> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| StrprobeError::NotFound(id.to_string()))
    }

    fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedEntry>> {
        Ok(self.entries.values().find(|e| e.value == value).cloned())
    }

    fn list(&self) -> Result<Vec<AnalyzedEntry>> {
        Ok(self.entries.values().cloned().collect())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        if self.entries.remove(id).is_none() {
            return Err(StrprobeError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn query(&self, predicate: &FilterPredicate) -> Result<Vec<AnalyzedEntry>> {
        Ok(self
            .entries
            .values()
            .filter(|e| predicate.matches(&e.properties))
            .cloned()
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::analyzer::analyze;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_value(mut self, value: &str) -> Self {
            let entry = AnalyzedEntry::new(value.to_string(), analyze(value).unwrap());
            self.store.save(&entry).unwrap();
            self
        }

        pub fn with_values(mut self, values: &[&str]) -> Self {
            for value in values {
                self = self.with_value(value);
            }
            self
        }
    }

    /// A small corpus with varied shapes: palindromes, multi-word strings,
    /// punctuation, mixed case.
    pub fn corpus() -> Vec<&'static str> {
        vec![
            "madam",
            "hello",
            "racecar",
            "never odd or even",
            "The quick brown fox",
            "a",
            "Aa",
            "two words",
            "BANANA",
            "Madam, I'm Adam",
        ]
    }

    /// Every combination of a few representative values per field, including
    /// the empty predicate. Used by the pushdown equivalence tests.
    pub fn predicate_grid() -> Vec<FilterPredicate> {
        let mut grid = Vec::new();
        for is_palindrome in [None, Some(true), Some(false)] {
            for min_length in [None, Some(1), Some(5)] {
                for max_length in [None, Some(5), Some(20)] {
                    for word_count in [None, Some(1), Some(4)] {
                        for contains_character in [None, Some('a'), Some('z')] {
                            let p = FilterPredicate {
                                is_palindrome,
                                min_length,
                                max_length,
                                word_count,
                                contains_character,
                            };
                            if p.validate().is_ok() {
                                grid.push(p);
                            }
                        }
                    }
                }
            }
        }
        grid
    }
}
