use crate::analyzer;
use crate::commands::CmdResult;
use crate::error::Result;

/// Computes properties for a value without persisting anything.
pub fn run(raw: &str) -> Result<CmdResult> {
    let properties = analyzer::analyze(raw)?;
    Ok(CmdResult::default().with_properties(properties))
}
