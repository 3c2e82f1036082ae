pub mod entities;
pub mod error;
pub mod services;
pub mod value_objects;

// Re-export entity types
pub use entities::{
    DerivedRiskMetrics, DurationStat, Episode, MatrixMeta, MatrixSnapshot, ROW_SUM_TOLERANCE,
    RiskToStress, TransitionMatrix,
};

pub use error::MatrixError;

// Re-export services
pub use services::{
    DEFAULT_ALPHA, DEFAULT_STEP_DAYS, DurationCalculator, HORIZON_WEEKS, MAX_STEP_DAYS,
    RiskPropagator, TransitionMatrixBuilder,
};

// Re-export value objects
pub use value_objects::{MAX_LABEL_LEN, RegimeLabel, Sample};
