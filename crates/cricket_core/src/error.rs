use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Increment is missing event.bowler.id")]
    MissingBowlerId,

    #[error("Increment is missing event.ball.innings")]
    MissingInnings,

    #[error("Invalid {field}: {value} (identifiers must be positive)")]
    InvalidIdentifier { field: &'static str, value: u32 },

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Malformed increment on line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Increment on line {line} rejected: {source}")]
    RejectedLine {
        line: usize,
        #[source]
        source: Box<StatsError>,
    },

    #[error("Increment #{index} rejected: {source}")]
    AtPosition {
        index: usize,
        #[source]
        source: Box<StatsError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    /// True when the error stems from the caller handing over a malformed
    /// increment rather than from the environment.
    pub fn is_caller_defect(&self) -> bool {
        match self {
            StatsError::MissingBowlerId => true,
            StatsError::MissingInnings => true,
            StatsError::InvalidIdentifier { .. } => true,
            StatsError::Deserialization(_) => true,
            StatsError::MalformedLine { .. } => true,
            StatsError::RejectedLine { source, .. } => source.is_caller_defect(),
            StatsError::AtPosition { source, .. } => source.is_caller_defect(),
            StatsError::Config(_) => false,
            StatsError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
