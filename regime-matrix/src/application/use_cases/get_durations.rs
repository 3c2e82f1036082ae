use crate::application::ports::MatrixStore;
use crate::application::use_cases::QueryError;
use crate::domain::DurationStat;
use std::sync::Arc;

/// Duration statistics computed alongside the current matrix
pub struct GetDurationsUseCase<M: MatrixStore> {
    store: Arc<M>,
}

impl<M: MatrixStore> GetDurationsUseCase<M> {
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<DurationStat>, QueryError> {
        let snapshot = self.store.current().await.ok_or(QueryError::NoMatrix)?;
        Ok(snapshot.durations.clone())
    }
}
