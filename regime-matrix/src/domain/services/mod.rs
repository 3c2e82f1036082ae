mod duration_calculator;
mod matrix_builder;
mod risk_propagator;

pub use duration_calculator::DurationCalculator;
pub use matrix_builder::{DEFAULT_ALPHA, DEFAULT_STEP_DAYS, MAX_STEP_DAYS, TransitionMatrixBuilder};
pub use risk_propagator::{HORIZON_WEEKS, RiskPropagator};
