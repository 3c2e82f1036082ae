use crate::application::ports::SampleSource;
use crate::domain::{RegimeLabel, Sample};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory store of labeled regime observations
///
/// Observations are kept sorted by timestamp; one label per timestamp.
/// Checkpoints are taken at midnight UTC.
pub struct InMemorySampleSource {
    observations: Arc<RwLock<BTreeMap<DateTime<Utc>, RegimeLabel>>>,
}

impl InMemorySampleSource {
    pub fn new() -> Self {
        InMemorySampleSource {
            observations: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create pre-loaded with observations
    pub fn with_observations(observations: impl IntoIterator<Item = Sample>) -> Self {
        let source = Self::new();
        source.insert_all(observations);
        source
    }

    fn insert_all(&self, observations: impl IntoIterator<Item = Sample>) -> usize {
        let mut map = self.observations.write();
        for sample in observations {
            map.insert(sample.timestamp, sample.label);
        }
        map.len()
    }
}

impl Default for InMemorySampleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemorySampleSource {
    fn clone(&self) -> Self {
        InMemorySampleSource {
            observations: Arc::clone(&self.observations),
        }
    }
}

#[async_trait]
impl SampleSource for InMemorySampleSource {
    async fn samples(&self, from: NaiveDate, to: NaiveDate, step_days: u32) -> Vec<Sample> {
        if step_days == 0 || from > to {
            return Vec::new();
        }

        let map = self.observations.read();
        let step = Duration::try_days(i64::from(step_days));
        let end = to.and_time(NaiveTime::MIN).and_utc();

        let mut samples = Vec::new();
        let mut next = Some(from.and_time(NaiveTime::MIN).and_utc());
        while let Some(checkpoint) = next.filter(|c| *c <= end) {
            if let Some((_, label)) = map.range(..=checkpoint).next_back() {
                samples.push(Sample::new(checkpoint, label.clone()));
            }
            // Stops at the end of chrono's representable range
            next = step.and_then(|step| checkpoint.checked_add_signed(step));
        }
        samples
    }

    async fn ingest(&self, observations: Vec<Sample>) -> usize {
        self.insert_all(observations)
    }

    async fn observation_count(&self) -> usize {
        self.observations.read().len()
    }
}
