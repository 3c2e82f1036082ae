use crate::domain::Sample;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Supplier of labeled regime samples
///
/// Returned samples are time-sorted and unique; consumers never sort or dedupe.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// One sample per `step_days` checkpoint in `[from, to]`.
    ///
    /// Each checkpoint carries the latest observed label at or before it.
    /// Checkpoints with no prior observation are skipped.
    async fn samples(&self, from: NaiveDate, to: NaiveDate, step_days: u32) -> Vec<Sample>;

    /// Add raw observations; an existing timestamp is overwritten.
    ///
    /// Returns the number of stored observations afterwards.
    async fn ingest(&self, observations: Vec<Sample>) -> usize;

    /// Number of stored observations
    async fn observation_count(&self) -> usize;
}
