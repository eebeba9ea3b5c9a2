use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EntryStore;

/// Deletes an entry permanently. Deletion removes the whole entry; there is
/// no soft-delete state.
pub fn run<S: EntryStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let entry = store.find_by_id(id)?;
    store.remove(id)?;

    let mut result = CmdResult::default().with_affected_entries(vec![entry]);
    result.add_message(CmdMessage::success(format!("Deleted entry {id}")));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::StrprobeError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_delete_removes_entry() {
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, "madam").unwrap();
        let id = added.affected_entries[0].id.clone();

        run(&mut store, &id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "no-such-id"),
            Err(StrprobeError::NotFound(_))
        ));
    }

    #[test]
    fn test_deleted_value_can_be_added_again() {
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, "madam").unwrap();
        let id = added.affected_entries[0].id.clone();
        run(&mut store, &id).unwrap();

        assert!(add::run(&mut store, "madam").is_ok());
    }
}
