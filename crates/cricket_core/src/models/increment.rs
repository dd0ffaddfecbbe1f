//! Ball-by-ball increment payloads
//!
//! One [`Increment`] describes a single physical ball as delivered by the feed.
//! The shapes follow the feed's camelCase JSON:
//!
//! ```text
//! { "runs": 4,
//!   "wicket": { "eventType": "caught", ... },
//!   "event": { "bowler": { "id": 7 }, "ball": { "innings": 1 }, "eventType": "delivery" } }
//! ```
//!
//! Identifiers stay optional here so that an absent `bowler.id` or
//! `ball.innings` reaches the reducer and is rejected there instead of being
//! defaulted during deserialization.

use serde::{Deserialize, Serialize};

/// A single ball event plus the runs and dismissal it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Increment {
    /// Runs conceded on this ball. Absent in the feed means 0.
    #[serde(default)]
    pub runs: u32,
    pub event: BallEvent,
    /// Present only when the ball produced a dismissal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wicket: Option<Wicket>,
}

impl Increment {
    /// Plain increment with no dismissal.
    pub fn new(runs: u32, event: BallEvent) -> Self {
        Self { runs, event, wicket: None }
    }

    pub fn with_wicket(mut self, wicket: Wicket) -> Self {
        self.wicket = Some(wicket);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallEvent {
    #[serde(default)]
    pub bowler: BowlerRef,
    #[serde(default)]
    pub ball: BallRef,
    pub event_type: String,
}

impl BallEvent {
    pub fn new(innings: u32, bowler_id: u32, event_type: impl Into<String>) -> Self {
        Self {
            bowler: BowlerRef { id: Some(bowler_id) },
            ball: BallRef { innings: Some(innings) },
            event_type: event_type.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innings: Option<u32>,
}

/// Dismissal descriptor. Fields beyond `eventType` (fielder, batter, ...) are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wicket {
    /// Empty when the feed omits it; the wicket is still counted.
    #[serde(default)]
    pub event_type: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Wicket {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self { event_type: event_type.into(), details: serde_json::Map::new() }
    }
}
