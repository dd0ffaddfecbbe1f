use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::increment::{BallEvent, Wicket};

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u32 = 6;

/// Running bowling figures for one bowler in one innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BowlerRecord {
    /// Runs conceded, extras included.
    pub runs: u32,
    pub legal_balls_bowled: u32,
    pub wides_bowled: u32,
    pub runs_from_wides: u32,
    pub no_balls_bowled: u32,
    pub runs_from_no_balls: u32,
    /// Filled in downstream from the counters; never written by the reducer.
    pub economy_rate: f64,
    /// Dismissals in the order they happened.
    pub wickets: Vec<Wicket>,
    /// Filled in downstream from the counters; never written by the reducer.
    pub strike_rate: f64,
    /// Runs off the bat -> number of legal deliveries with that outcome.
    pub scoring: BTreeMap<u32, u32>,
    /// Audit trail, only populated when `ReducerConfig::record_events` is set.
    pub events: Vec<BallEvent>,
}

impl BowlerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed overs and the balls of the over in progress, e.g. `(3, 2)` for 3.2.
    pub fn overs(&self) -> (u32, u32) {
        (self.legal_balls_bowled / BALLS_PER_OVER, self.legal_balls_bowled % BALLS_PER_OVER)
    }

    /// Wides plus no-balls.
    pub fn extras(&self) -> u32 {
        self.wides_bowled + self.no_balls_bowled
    }

    pub fn wicket_count(&self) -> usize {
        self.wickets.len()
    }

    /// Number of legal deliveries that produced `runs` off the bat.
    pub fn scoring_count(&self, runs: u32) -> u32 {
        self.scoring.get(&runs).copied().unwrap_or(0)
    }
}
