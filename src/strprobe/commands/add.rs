use crate::analyzer;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StrprobeError};
use crate::model::AnalyzedEntry;
use crate::store::EntryStore;

/// Analyzes a value and persists the result.
///
/// Duplicates are detected by raw value equality, not by hash: the pre-check
/// asks the store for an entry with the exact same `value`. The store's own
/// id-uniqueness check in `save` backs this up (the pair is not atomic from
/// here), and both surface as the same `Duplicate` kind.
pub fn run<S: EntryStore>(store: &mut S, raw: &str) -> Result<CmdResult> {
    let properties = analyzer::analyze(raw)?;

    if let Some(existing) = store.find_by_value(raw)? {
        return Err(StrprobeError::Duplicate(existing.id));
    }

    let entry = AnalyzedEntry::new(raw.to_string(), properties);
    store.save(&entry)?;

    let mut result = CmdResult::default().with_affected_entries(vec![entry.clone()]);
    result.add_message(CmdMessage::success(format!("Stored entry {}", entry.id)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_add_stores_entry_keyed_by_hash() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "madam").unwrap();

        let entry = &result.affected_entries[0];
        assert_eq!(entry.id, entry.properties.content_hash);
        assert_eq!(store.find_by_id(&entry.id).unwrap().value, "madam");
    }

    #[test]
    fn test_second_identical_value_is_a_duplicate() {
        let mut store = InMemoryStore::new();
        run(&mut store, "madam").unwrap();
        let err = run(&mut store, "madam").unwrap_err();
        assert!(matches!(err, StrprobeError::Duplicate(_)));
        // Still exactly one entry
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_distinct_values_coexist() {
        let mut store = InMemoryStore::new();
        run(&mut store, "madam").unwrap();
        run(&mut store, "hello").unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_value_is_rejected_before_touching_the_store() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "   "),
            Err(StrprobeError::EmptyValue)
        ));
        assert!(store.list().unwrap().is_empty());
    }
}
