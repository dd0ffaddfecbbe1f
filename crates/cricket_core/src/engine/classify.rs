//! Delivery classification
//!
//! Only `wide` and `noBall` are extras. Every other `eventType`, dismissal types
//! and unrecognised strings included, is a legal delivery. That fallback is the
//! single `_` arm in [`DeliveryKind::from_event_type`].

pub const WIDE: &str = "wide";
pub const NO_BALL: &str = "noBall";
pub const DELIVERY: &str = "delivery";

/// Legal event types that are expected on the feed. Anything outside this list
/// and the two extras is still legal but gets logged.
pub const KNOWN_LEGAL_EVENT_TYPES: &[&str] = &[
    DELIVERY,
    "bowled",
    "caught",
    "lbw",
    "stumped",
    "runOut",
    "hitWicket",
    "handledBall",
    "obstructingField",
    "timedOut",
    "retired",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryKind {
    Wide,
    NoBall,
    /// Counts toward the over and the scoring histogram.
    Legal,
}

impl DeliveryKind {
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            WIDE => DeliveryKind::Wide,
            NO_BALL => DeliveryKind::NoBall,
            _ => DeliveryKind::Legal,
        }
    }

    pub fn counts_toward_over(self) -> bool {
        matches!(self, DeliveryKind::Legal)
    }

    pub fn is_extra(self) -> bool {
        !self.counts_toward_over()
    }
}

/// True when `event_type` is one of the names the feed is known to send.
pub fn is_known_event_type(event_type: &str) -> bool {
    event_type == WIDE
        || event_type == NO_BALL
        || KNOWN_LEGAL_EVENT_TYPES.iter().any(|known| *known == event_type)
}
