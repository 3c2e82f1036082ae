use crate::domain::value_objects::RegimeLabel;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A maximal run of consecutive samples sharing one label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub label: RegimeLabel,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Number of samples in the run
    pub length: usize,
}

/// Episode-length statistics for one regime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationStat {
    pub label: RegimeLabel,
    /// Number of episodes
    pub count: usize,
    pub median_weeks: f64,
    pub mean_weeks: f64,
    pub max_weeks: f64,
}
