use crate::domain::entities::{DerivedRiskMetrics, RiskToStress, TransitionMatrix};
use crate::domain::error::MatrixError;
use crate::domain::value_objects::RegimeLabel;

/// Horizons reported in `riskToStress`, in weeks
pub const HORIZON_WEEKS: [u32; 3] = [1, 2, 4];

/// Propagates a regime distribution through a transition matrix.
///
/// Uses repeated row-vector multiplication (`v_{n+1} = v_n * M`). Horizons are
/// a handful of steps, so no matrix power or eigen-decomposition is needed.
pub struct RiskPropagator;

impl RiskPropagator {
    /// Number of matrix steps covering `weeks` at the matrix's native step size.
    ///
    /// Always at least one step.
    pub fn steps_for_horizon(weeks: u32, step_days: u32) -> usize {
        if step_days == 0 {
            return 1;
        }
        let steps = (f64::from(weeks) * 7.0 / f64::from(step_days)).round() as usize;
        steps.max(1)
    }

    /// Distribution over labels after `steps` steps from a one-hot start at `current`
    pub fn propagate(
        matrix: &TransitionMatrix,
        current: &RegimeLabel,
        steps: usize,
    ) -> Result<Vec<f64>, MatrixError> {
        Self::check_square(matrix)?;
        let start = Self::origin(matrix, current)?;

        let mut v = vec![0.0; matrix.dimension()];
        v[start] = 1.0;
        for _ in 0..steps {
            v = step(&v, matrix.matrix());
        }
        Ok(v)
    }

    /// Highest one-step probability from `current`; ties go to the earliest label
    pub fn most_likely_next(
        matrix: &TransitionMatrix,
        current: &RegimeLabel,
    ) -> Result<RegimeLabel, MatrixError> {
        Self::check_square(matrix)?;
        let i = Self::origin(matrix, current)?;

        let mut best = 0;
        for (j, &p) in matrix.matrix()[i].iter().enumerate() {
            if p > matrix.matrix()[i][best] {
                best = j;
            }
        }

        matrix
            .label_at(best)
            .cloned()
            .ok_or_else(|| MatrixError::DimensionMismatch("empty matrix".to_string()))
    }

    /// Full derived metrics for `current` against a set of stress labels.
    ///
    /// An empty stress set yields all-zero risk.
    pub fn derive(
        matrix: &TransitionMatrix,
        current: &RegimeLabel,
        stress_labels: &[RegimeLabel],
    ) -> Result<DerivedRiskMetrics, MatrixError> {
        Self::check_square(matrix)?;
        Self::origin(matrix, current)?;

        let mut stress_idx = Vec::with_capacity(stress_labels.len());
        for label in stress_labels {
            let idx = matrix.index_of(label).ok_or_else(|| {
                MatrixError::DimensionMismatch(format!(
                    "stress label {} is not in the matrix vocabulary",
                    label
                ))
            })?;
            if !stress_idx.contains(&idx) {
                stress_idx.push(idx);
            }
        }

        let step_days = matrix.meta().step_days;
        let mut risk = [0.0; HORIZON_WEEKS.len()];
        for (slot, weeks) in risk.iter_mut().zip(HORIZON_WEEKS) {
            let steps = Self::steps_for_horizon(weeks, step_days);
            let v = Self::propagate(matrix, current, steps)?;
            let mass: f64 = stress_idx.iter().map(|&i| v[i]).sum();
            *slot = mass.clamp(0.0, 1.0);
        }

        Ok(DerivedRiskMetrics {
            current_label: current.clone(),
            most_likely_next: Self::most_likely_next(matrix, current)?,
            stress_labels: stress_idx
                .iter()
                .filter_map(|&i| matrix.label_at(i).cloned())
                .collect(),
            risk_to_stress: RiskToStress {
                p1w: risk[0],
                p2w: risk[1],
                p4w: risk[2],
            },
        })
    }

    fn origin(matrix: &TransitionMatrix, current: &RegimeLabel) -> Result<usize, MatrixError> {
        matrix
            .index_of(current)
            .ok_or_else(|| MatrixError::UnknownLabel(current.to_string()))
    }

    fn check_square(matrix: &TransitionMatrix) -> Result<(), MatrixError> {
        if matrix.is_square() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch(format!(
                "matrix is not {n}x{n}",
                n = matrix.dimension()
            )))
        }
    }
}

/// Row vector times matrix
fn step(v: &[f64], m: &[Vec<f64>]) -> Vec<f64> {
    let mut next = vec![0.0; v.len()];
    for (i, &weight) in v.iter().enumerate() {
        if weight == 0.0 {
            continue;
        }
        for (j, &p) in m[i].iter().enumerate() {
            next[j] += weight * p;
        }
    }
    next
}
