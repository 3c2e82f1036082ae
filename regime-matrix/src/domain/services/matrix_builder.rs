use crate::domain::entities::{MatrixMeta, TransitionMatrix};
use crate::domain::error::MatrixError;
use crate::domain::value_objects::{RegimeLabel, Sample};
use indexmap::IndexSet;

/// Default additive smoothing pseudo-count
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Default sampling step in days
pub const DEFAULT_STEP_DAYS: u32 = 7;

/// Longest accepted sampling step: one leap year
pub const MAX_STEP_DAYS: u32 = 366;

/// Builds a smoothed row-stochastic transition matrix from a labeled sample sequence.
///
/// Consecutive samples form one transition each, regardless of the gap between
/// them. Counts are Laplace-smoothed:
///
/// ```text
/// P[i][j] = (C[i][j] + alpha) / (sum_j C[i][j] + alpha * |L|)
/// ```
///
/// A row with no outgoing transitions and `alpha == 0` has a zero denominator and
/// falls back to the uniform distribution.
#[derive(Debug, Clone)]
pub struct TransitionMatrixBuilder {
    alpha: f64,
    step_days: u32,
    vocabulary: Option<Vec<RegimeLabel>>,
}

impl Default for TransitionMatrixBuilder {
    fn default() -> Self {
        TransitionMatrixBuilder {
            alpha: DEFAULT_ALPHA,
            step_days: DEFAULT_STEP_DAYS,
            vocabulary: None,
        }
    }
}

impl TransitionMatrixBuilder {
    pub fn new(step_days: u32, alpha: f64) -> Self {
        TransitionMatrixBuilder {
            alpha,
            step_days,
            vocabulary: None,
        }
    }

    /// Fix row/column order (and dimension) instead of using first appearance
    pub fn with_vocabulary(mut self, vocabulary: Vec<RegimeLabel>) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn step_days(&self) -> u32 {
        self.step_days
    }

    pub fn build(&self, samples: &[Sample]) -> Result<TransitionMatrix, MatrixError> {
        self.validate(samples)?;

        let labels = self.vocabulary_for(samples)?;
        let n = labels.len();

        let mut counts = vec![vec![0u64; n]; n];
        for pair in samples.windows(2) {
            let (Some(i), Some(j)) = (
                labels.get_index_of(&pair[0].label),
                labels.get_index_of(&pair[1].label),
            ) else {
                return Err(MatrixError::UnknownLabel(pair[1].label.to_string()));
            };
            counts[i][j] += 1;
        }

        let matrix = counts
            .iter()
            .map(|row| smooth_row(row, self.alpha))
            .collect();

        let meta = MatrixMeta {
            labels: labels.iter().cloned().collect(),
            samples: samples.len() - 1,
            alpha: self.alpha,
            from: samples[0].timestamp.date_naive(),
            to: samples[samples.len() - 1].timestamp.date_naive(),
            step_days: self.step_days,
        };

        Ok(TransitionMatrix::from_parts(labels, matrix, counts, meta))
    }

    fn validate(&self, samples: &[Sample]) -> Result<(), MatrixError> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(MatrixError::InvalidAlpha(self.alpha));
        }
        if self.step_days == 0 || self.step_days > MAX_STEP_DAYS {
            return Err(MatrixError::InvalidStep(self.step_days));
        }
        if samples.len() < 2 {
            return Err(MatrixError::InsufficientData {
                samples: samples.len(),
            });
        }
        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(MatrixError::UnorderedSamples { index: index + 1 });
        }
        Ok(())
    }

    fn vocabulary_for(&self, samples: &[Sample]) -> Result<IndexSet<RegimeLabel>, MatrixError> {
        match &self.vocabulary {
            Some(vocabulary) => {
                let labels: IndexSet<RegimeLabel> = vocabulary.iter().cloned().collect();
                if let Some(missing) = samples.iter().find(|s| !labels.contains(&s.label)) {
                    return Err(MatrixError::UnknownLabel(missing.label.to_string()));
                }
                Ok(labels)
            }
            None => Ok(samples.iter().map(|s| s.label.clone()).collect()),
        }
    }
}

fn smooth_row(counts: &[u64], alpha: f64) -> Vec<f64> {
    let n = counts.len() as f64;
    let total: u64 = counts.iter().sum();
    let denominator = total as f64 + alpha * n;

    if denominator <= 0.0 {
        return vec![1.0 / n; counts.len()];
    }

    counts
        .iter()
        .map(|&c| (c as f64 + alpha) / denominator)
        .collect()
}
