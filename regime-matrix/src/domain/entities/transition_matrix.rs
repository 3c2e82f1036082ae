//! Transition Matrix
//!
//! Smoothed, row-stochastic Markov matrix between regimes. Built once by
//! [`TransitionMatrixBuilder`](crate::domain::TransitionMatrixBuilder) and
//! never mutated afterwards.

use crate::domain::value_objects::RegimeLabel;
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;

/// Allowed deviation of a row sum from 1.0
pub const ROW_SUM_TOLERANCE: f64 = 1e-2;

/// Build parameters and provenance of a matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixMeta {
    /// Same order as matrix rows and columns
    pub labels: Vec<RegimeLabel>,
    /// Number of transition pairs counted
    pub samples: usize,
    /// Additive smoothing pseudo-count
    pub alpha: f64,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub step_days: u32,
}

/// Discrete-time transition matrix over a per-matrix label vocabulary.
///
/// `matrix[i][j]` is the probability of moving from `labels[i]` to `labels[j]`
/// in one step. Label order is first appearance (or caller supplied), not sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionMatrix {
    labels: IndexSet<RegimeLabel>,
    matrix: Vec<Vec<f64>>,
    row_sums: Vec<f64>,
    counts: Vec<Vec<u64>>,
    meta: MatrixMeta,
}

impl TransitionMatrix {
    pub(crate) fn from_parts(
        labels: IndexSet<RegimeLabel>,
        matrix: Vec<Vec<f64>>,
        counts: Vec<Vec<u64>>,
        meta: MatrixMeta,
    ) -> Self {
        let row_sums = matrix.iter().map(|row| row.iter().sum()).collect();
        TransitionMatrix {
            labels,
            matrix,
            row_sums,
            counts,
            meta,
        }
    }

    pub fn labels(&self) -> &IndexSet<RegimeLabel> {
        &self.labels
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn row_sums(&self) -> &[f64] {
        &self.row_sums
    }

    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    pub fn meta(&self) -> &MatrixMeta {
        &self.meta
    }

    /// Number of labels (rows)
    pub fn dimension(&self) -> usize {
        self.labels.len()
    }

    pub fn index_of(&self, label: &RegimeLabel) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    pub fn label_at(&self, index: usize) -> Option<&RegimeLabel> {
        self.labels.get_index(index)
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.matrix.get(index).map(Vec::as_slice)
    }

    /// One-step probability `from -> to`, `None` if either label is unknown
    pub fn probability(&self, from: &RegimeLabel, to: &RegimeLabel) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Some(self.matrix[i][j])
    }

    /// Every row has exactly `dimension()` entries
    pub fn is_square(&self) -> bool {
        self.matrix.len() == self.labels.len()
            && self.matrix.iter().all(|row| row.len() == self.labels.len())
    }

    /// Every row sums to 1 within [`ROW_SUM_TOLERANCE`]
    pub fn is_row_stochastic(&self) -> bool {
        self.row_sums
            .iter()
            .all(|sum| (sum - 1.0).abs() < ROW_SUM_TOLERANCE)
    }
}
