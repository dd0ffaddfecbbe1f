//! # Stats engine
//!
//! Classification rules and the reducer that folds ball events into a
//! [`StatsTree`](crate::models::StatsTree).
//!
//! ```rust
//! use cricket_core::engine::apply_event;
//! use cricket_core::models::{BallEvent, Increment, StatsTree};
//!
//! let mut tree = StatsTree::new();
//! apply_event(&mut tree, &Increment::new(4, BallEvent::new(1, 1, "delivery"))).unwrap();
//! assert_eq!(tree.record(1, 1).unwrap().scoring_count(4), 1);
//! ```

mod classify;
mod config;
mod reducer;

pub use classify::{is_known_event_type, DeliveryKind, KNOWN_LEGAL_EVENT_TYPES};
pub use config::{ReducerConfig, REDUCER_CONFIG_PATH_ENV};
pub use reducer::{apply_event, StatsReducer};
