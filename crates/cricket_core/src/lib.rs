//! # cricket_core - Ball-by-ball bowling statistics
//!
//! Folds a stream of ball events into running per-innings, per-bowler
//! bowling figures.
//!
//! ## Features
//! - One reducer owns every counting rule (legal balls, extras, wickets,
//!   scoring histogram)
//! - Lazily grown `innings -> bowler -> record` tree
//! - JSON and newline-delimited replay-log entry points
//!
//! The caller owns the [`StatsTree`] and must submit each physical ball exactly
//! once, in ball order, from a single writer.

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{apply_event_json, apply_events_json_lines};
pub use engine::{apply_event, DeliveryKind, ReducerConfig, StatsReducer};
pub use error::{Result, StatsError};
pub use models::{BallEvent, BowlerRecord, Increment, StatsTree, Wicket};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
