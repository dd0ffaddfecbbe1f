//! Bowling statistics reducer
//!
//! Consumes one [`Increment`] at a time and folds it into the [`StatsTree`].
//! This is the only place the counting rules live:
//!
//! - `runs` always adds to the bowler's conceded total.
//! - `wide` / `noBall` bump their own count and run total, nothing else.
//! - Every other event type is a legal ball: it counts toward the over and
//!   lands in the scoring histogram under its `runs` value.
//! - A present `wicket` is appended regardless of the delivery kind.
//!
//! The reducer is not idempotent. Submitting the same physical ball twice
//! counts it twice, so callers must deliver each ball exactly once, in ball
//! order per bowler. Calls on one tree must be serialized by the owner.

use tracing::{debug, error, trace, warn};

use super::classify::{is_known_event_type, DeliveryKind};
use super::config::ReducerConfig;
use crate::error::{Result, StatsError};
use crate::models::{BowlerId, Increment, InningsId, StatsTree};

/// Applies `increment` to `tree` with the default configuration.
///
/// Fails without touching the tree when `event.bowler.id` or
/// `event.ball.innings` is missing or zero.
pub fn apply_event<'t>(tree: &'t mut StatsTree, increment: &Increment) -> Result<&'t mut StatsTree> {
    StatsReducer::default().apply(tree, increment)
}

/// Reducer with an explicit [`ReducerConfig`].
#[derive(Debug, Clone, Default)]
pub struct StatsReducer {
    config: ReducerConfig,
}

impl StatsReducer {
    pub fn new(config: ReducerConfig) -> Self {
        Self { config }
    }

    pub fn apply<'t>(&self, tree: &'t mut StatsTree, increment: &Increment) -> Result<&'t mut StatsTree> {
        let (innings, bowler_id) = resolve_coordinates(increment).inspect_err(|e| {
            error!(event_type = %increment.event.event_type, "rejecting increment: {e}");
        })?;

        let event_type = increment.event.event_type.as_str();
        let kind = DeliveryKind::from_event_type(event_type);
        if self.config.warn_on_unknown_event_type && !is_known_event_type(event_type) {
            warn!(innings, bowler_id, event_type, "unrecognised event type counted as a legal delivery");
        }

        let runs = increment.runs;
        let (record, created) = tree.record_or_insert(innings, bowler_id);
        if created {
            trace!(innings, bowler_id, "created bowler record");
        }

        // Counters saturate at u32::MAX.
        record.runs = record.runs.saturating_add(runs);

        match kind {
            DeliveryKind::Wide => {
                record.wides_bowled = record.wides_bowled.saturating_add(1);
                record.runs_from_wides = record.runs_from_wides.saturating_add(runs);
            }
            DeliveryKind::NoBall => {
                record.no_balls_bowled = record.no_balls_bowled.saturating_add(1);
                record.runs_from_no_balls = record.runs_from_no_balls.saturating_add(runs);
            }
            DeliveryKind::Legal => {
                record.legal_balls_bowled = record.legal_balls_bowled.saturating_add(1);
                let count = record.scoring.entry(runs).or_insert(0);
                *count = count.saturating_add(1);
            }
        }

        if let Some(wicket) = &increment.wicket {
            record.wickets.push(wicket.clone());
        }

        if self.config.record_events {
            record.events.push(increment.event.clone());
        }

        debug!(
            innings,
            bowler_id,
            ?kind,
            runs,
            wicket = increment.wicket.is_some(),
            "applied ball event"
        );

        Ok(tree)
    }

    /// Applies increments in iteration order. Stops at the first malformed
    /// increment; everything before it stays applied.
    pub fn apply_all<'t, 'i, I>(&self, tree: &'t mut StatsTree, increments: I) -> Result<&'t mut StatsTree>
    where
        I: IntoIterator<Item = &'i Increment>,
    {
        for (index, increment) in increments.into_iter().enumerate() {
            self.apply(tree, increment)
                .map_err(|e| StatsError::AtPosition { index, source: Box::new(e) })?;
        }
        Ok(tree)
    }
}

fn resolve_coordinates(increment: &Increment) -> Result<(InningsId, BowlerId)> {
    let innings = increment.event.ball.innings.ok_or(StatsError::MissingInnings)?;
    let bowler_id = increment.event.bowler.id.ok_or(StatsError::MissingBowlerId)?;

    if innings == 0 {
        return Err(StatsError::InvalidIdentifier { field: "ball.innings", value: innings });
    }
    if bowler_id == 0 {
        return Err(StatsError::InvalidIdentifier { field: "bowler.id", value: bowler_id });
    }

    Ok((innings, bowler_id))
}
