use crate::domain::value_objects::RegimeLabel;
use serde::Serialize;

/// Probability of sitting in any stress regime after 1, 2 and 4 weeks
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RiskToStress {
    pub p1w: f64,
    pub p2w: f64,
    pub p4w: f64,
}

/// Forward-looking metrics derived from the current matrix on each read
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedRiskMetrics {
    pub current_label: RegimeLabel,
    pub most_likely_next: RegimeLabel,
    pub stress_labels: Vec<RegimeLabel>,
    pub risk_to_stress: RiskToStress,
}
