use super::{DurationStat, TransitionMatrix};
use crate::domain::value_objects::RegimeLabel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Everything one compute run produced, stored and replaced as a unit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSnapshot {
    pub id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub matrix: TransitionMatrix,
    pub durations: Vec<DurationStat>,
    /// Label of the final sample, the default origin for risk propagation
    pub last_label: RegimeLabel,
}

impl MatrixSnapshot {
    pub fn new(
        matrix: TransitionMatrix,
        durations: Vec<DurationStat>,
        last_label: RegimeLabel,
        computed_at: DateTime<Utc>,
    ) -> Self {
        MatrixSnapshot {
            id: Uuid::new_v4(),
            computed_at,
            matrix,
            durations,
            last_label,
        }
    }
}
