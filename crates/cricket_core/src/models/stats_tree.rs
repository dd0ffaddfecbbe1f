//! Per-innings, per-bowler statistics tree
//!
//! Two-level ordered map `innings -> bowler -> BowlerRecord`. The tree starts
//! empty and records appear the first time a coordinate is touched. An existing
//! record is only ever mutated in place, never replaced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::bowler_record::BowlerRecord;

pub type InningsId = u32;
pub type BowlerId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct StatsTree {
    innings: BTreeMap<InningsId, BTreeMap<BowlerId, BowlerRecord>>,
}

impl StatsTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, innings: InningsId, bowler: BowlerId) -> Option<&BowlerRecord> {
        self.innings.get(&innings).and_then(|bowlers| bowlers.get(&bowler))
    }

    /// Returns the record at `(innings, bowler)`, creating a zeroed one first if
    /// the coordinate has not been seen yet. The bool is true on creation.
    pub fn record_or_insert(
        &mut self,
        innings: InningsId,
        bowler: BowlerId,
    ) -> (&mut BowlerRecord, bool) {
        let bowlers = self.innings.entry(innings).or_default();
        let created = !bowlers.contains_key(&bowler);
        (bowlers.entry(bowler).or_default(), created)
    }

    /// Innings that have at least one record, ascending.
    pub fn innings_ids(&self) -> impl Iterator<Item = InningsId> + '_ {
        self.innings.keys().copied()
    }

    /// Records of one innings, ordered by bowler id.
    pub fn bowlers(
        &self,
        innings: InningsId,
    ) -> impl Iterator<Item = (BowlerId, &BowlerRecord)> + '_ {
        self.innings.get(&innings).into_iter().flat_map(|b| b.iter().map(|(id, r)| (*id, r)))
    }

    /// Total number of bowler records across all innings.
    pub fn len(&self) -> usize {
        self.innings.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
