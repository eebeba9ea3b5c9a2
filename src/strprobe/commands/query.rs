use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{FilterParams, FilterPredicate};
use crate::store::EntryStore;
use crate::translate;

/// Structured filter path: validate the raw parameters, push the predicate
/// down to the store. Zero matches is a successful empty result, never an
/// error.
pub fn run_structured<S: EntryStore>(store: &S, params: &FilterParams) -> Result<CmdResult> {
    let predicate = FilterPredicate::from_params(params)?;
    run_predicate(store, &predicate)
}

/// Natural-language path: translate the text into a predicate, then query
/// exactly as the structured path does.
pub fn run_natural<S: EntryStore>(store: &S, text: &str) -> Result<CmdResult> {
    let predicate = translate::translate(text)?;
    let mut result = run_predicate(store, &predicate)?;
    result.add_message(CmdMessage::info(format!(
        "Interpreted query as {predicate:?}"
    )));
    Ok(result)
}

fn run_predicate<S: EntryStore>(store: &S, predicate: &FilterPredicate) -> Result<CmdResult> {
    let mut entries = store.query(predicate)?;
    // Stable output order regardless of backend
    entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    Ok(CmdResult::default().with_listed_entries(entries))
}
