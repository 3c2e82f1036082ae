mod derived_risk;
mod duration_stat;
mod snapshot;
mod transition_matrix;

pub use derived_risk::{DerivedRiskMetrics, RiskToStress};
pub use duration_stat::{DurationStat, Episode};
pub use snapshot::MatrixSnapshot;
pub use transition_matrix::{MatrixMeta, ROW_SUM_TOLERANCE, TransitionMatrix};
