use crate::application::ports::MatrixStore;
use crate::domain::{DerivedRiskMetrics, MatrixError, MatrixSnapshot, RegimeLabel, RiskPropagator};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Default)]
pub struct GetCurrentQuery {
    /// Origin regime; defaults to the last sampled label
    pub label: Option<RegimeLabel>,
    /// Explicit stress set; every entry must be in the matrix vocabulary
    pub stress_labels: Option<Vec<RegimeLabel>>,
}

#[derive(Debug, Clone)]
pub struct CurrentMatrix {
    pub snapshot: Arc<MatrixSnapshot>,
    pub derived: DerivedRiskMetrics,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("No transition matrix has been computed yet")]
    NoMatrix,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Read the current snapshot and derive stress risk from it
pub struct GetCurrentUseCase<M: MatrixStore> {
    store: Arc<M>,
    default_stress_labels: Vec<RegimeLabel>,
}

impl<M: MatrixStore> GetCurrentUseCase<M> {
    pub fn new(store: Arc<M>, default_stress_labels: Vec<RegimeLabel>) -> Self {
        Self {
            store,
            default_stress_labels,
        }
    }

    /// The stored snapshot, without derived metrics
    pub async fn snapshot(&self) -> Result<Arc<MatrixSnapshot>, QueryError> {
        self.store.current().await.ok_or(QueryError::NoMatrix)
    }

    pub async fn execute(&self, query: GetCurrentQuery) -> Result<CurrentMatrix, QueryError> {
        let snapshot = self.snapshot().await?;
        let matrix = &snapshot.matrix;

        let current = query
            .label
            .unwrap_or_else(|| snapshot.last_label.clone());

        // Configured defaults are filtered to the vocabulary, explicit ones are not
        let stress_labels: Vec<RegimeLabel> = match query.stress_labels {
            Some(labels) => labels,
            None => self
                .default_stress_labels
                .iter()
                .filter(|l| matrix.index_of(l).is_some())
                .cloned()
                .collect(),
        };

        let derived = RiskPropagator::derive(matrix, &current, &stress_labels)?;

        tracing::debug!(
            current = %derived.current_label,
            next = %derived.most_likely_next,
            p1w = derived.risk_to_stress.p1w,
            p4w = derived.risk_to_stress.p4w,
            "Derived stress risk"
        );

        Ok(CurrentMatrix { snapshot, derived })
    }
}
