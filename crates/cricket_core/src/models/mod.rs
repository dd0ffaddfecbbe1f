pub mod bowler_record;
pub mod increment;
pub mod stats_tree;

pub use bowler_record::{BowlerRecord, BALLS_PER_OVER};
pub use increment::{BallEvent, BallRef, BowlerRef, Increment, Wicket};
pub use stats_tree::{BowlerId, InningsId, StatsTree};
