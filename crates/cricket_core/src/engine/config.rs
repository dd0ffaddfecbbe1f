//! Reducer configuration
//!
//! ```rust
//! use cricket_core::engine::ReducerConfig;
//!
//! let config = ReducerConfig::default();
//! assert!(!config.record_events);
//! ```

use serde::{Deserialize, Serialize};
use std::{env, fs};

use crate::error::{Result, StatsError};

pub const REDUCER_CONFIG_PATH_ENV: &str = "CRICKET_REDUCER_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    /// Append every applied ball event to the record's `events` trail.
    pub record_events: bool,
    /// Emit a warning when an unrecognised `eventType` is counted as legal.
    /// Classification is the same either way.
    pub warn_on_unknown_event_type: bool,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self { record_events: false, warn_on_unknown_event_type: true }
    }
}

impl ReducerConfig {
    /// Same as default but with the audit trail switched on.
    pub fn audited() -> Self {
        Self { record_events: true, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| StatsError::Config(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content).map_err(|e| {
            StatsError::Config(format!("Failed to parse reducer config '{path}': {e}"))
        })?;
        log::info!("Loaded reducer config from {}", path);
        Ok(config)
    }

    /// Loads the file named by `CRICKET_REDUCER_CONFIG_PATH`, or defaults when
    /// the variable is unset or blank.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(REDUCER_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            log::debug!("{} is blank, using default reducer config", REDUCER_CONFIG_PATH_ENV);
            return Ok(Self::default());
        }

        Self::from_file(path)
    }
}
