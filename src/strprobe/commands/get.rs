use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::EntryStore;

/// Fetches a single entry by id.
pub fn run<S: EntryStore>(store: &S, id: &str) -> Result<CmdResult> {
    let entry = store.find_by_id(id)?;
    Ok(CmdResult::default().with_listed_entries(vec![entry]))
}
