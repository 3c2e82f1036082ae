use crate::application::ports::SampleSource;
use crate::domain::Sample;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestResult {
    pub ingested: usize,
    pub total: usize,
}

/// Push labeled observations into the sample source
pub struct IngestSamplesUseCase<S: SampleSource> {
    sample_source: Arc<S>,
}

impl<S: SampleSource> IngestSamplesUseCase<S> {
    pub fn new(sample_source: Arc<S>) -> Self {
        Self { sample_source }
    }

    pub async fn execute(&self, observations: Vec<Sample>) -> IngestResult {
        let ingested = observations.len();
        let total = self.sample_source.ingest(observations).await;
        tracing::info!(ingested, total, "Regime observations ingested");
        IngestResult { ingested, total }
    }
}
