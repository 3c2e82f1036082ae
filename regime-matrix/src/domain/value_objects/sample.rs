use super::RegimeLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A regime observed at one sampled checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub label: RegimeLabel,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, label: RegimeLabel) -> Self {
        Sample { timestamp, label }
    }
}
