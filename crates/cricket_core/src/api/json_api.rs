//! JSON entry points
//!
//! For callers holding raw feed payloads rather than typed [`Increment`]s.
//! A replay log is newline-delimited JSON, one increment per line, applied in
//! file order.

use tracing::{debug, info};

use crate::engine::StatsReducer;
use crate::error::{Result, StatsError};
use crate::models::{Increment, StatsTree};

/// Parses one JSON increment and applies it with the default reducer.
pub fn apply_event_json<'t>(tree: &'t mut StatsTree, json: &str) -> Result<&'t mut StatsTree> {
    apply_event_json_with(&StatsReducer::default(), tree, json)
}

pub fn apply_event_json_with<'t>(
    reducer: &StatsReducer,
    tree: &'t mut StatsTree,
    json: &str,
) -> Result<&'t mut StatsTree> {
    let increment: Increment = serde_json::from_str(json)?;
    reducer.apply(tree, &increment)
}

/// Applies a newline-delimited replay log. Blank lines are skipped.
///
/// Stops at the first line that fails to parse or apply; lines before it stay
/// applied. Both failures report the 1-based line number. Returns the number
/// of increments applied.
pub fn apply_events_json_lines(tree: &mut StatsTree, log: &str) -> Result<usize> {
    apply_events_json_lines_with(&StatsReducer::default(), tree, log)
}

pub fn apply_events_json_lines_with(
    reducer: &StatsReducer,
    tree: &mut StatsTree,
    log: &str,
) -> Result<usize> {
    let mut applied = 0;

    for (idx, line) in log.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let increment: Increment = serde_json::from_str(line)
            .map_err(|source| StatsError::MalformedLine { line: line_no, source })?;
        reducer
            .apply(tree, &increment)
            .map_err(|e| StatsError::RejectedLine { line: line_no, source: Box::new(e) })?;
        applied += 1;
    }

    debug!(applied, records = tree.len(), "replayed ball-by-ball log");
    if applied > 0 {
        info!("Applied {} increments across {} bowler records", applied, tree.len());
    }
    Ok(applied)
}
