use crate::domain::{DerivedRiskMetrics, DurationStat, RegimeLabel, Sample, TransitionMatrix};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// POST /api/regime/transition/compute
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub step_days: Option<u32>,
    #[serde(default)]
    pub alpha: Option<f64>,
    /// Fixed vocabulary (row order); omitted means first appearance
    #[serde(default)]
    pub labels: Option<Vec<RegimeLabel>>,
}

/// Query params for GET /api/regime/transition/current
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentQuery {
    /// Origin regime, defaults to the last sampled one
    #[serde(default)]
    pub label: Option<String>,
    /// Comma-separated stress labels
    #[serde(default)]
    pub stress_labels: Option<String>,
    /// Include duration stats (default true)
    #[serde(default)]
    pub durations: Option<bool>,
}

/// POST /api/regime/samples
#[derive(Debug, Clone, Deserialize)]
pub struct IngestRequest {
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixResponse {
    pub ok: bool,
    pub snapshot_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub matrix: TransitionMatrix,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentResponse {
    pub ok: bool,
    pub snapshot_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub matrix: TransitionMatrix,
    pub derived: DerivedRiskMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<Vec<DurationStat>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DurationsResponse {
    pub ok: bool,
    pub durations: Vec<DurationStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub ok: bool,
    pub ingested: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub has_matrix: bool,
    pub observations: usize,
}

/// Error body: `ok` is always false
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorResponse {
            ok: false,
            error: error.into(),
            message: message.into(),
        }
    }
}
