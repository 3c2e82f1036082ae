use crate::domain::entities::{DurationStat, Episode};
use crate::domain::value_objects::{RegimeLabel, Sample};
use indexmap::IndexMap;

/// Regime episode statistics over a labeled sample sequence
pub struct DurationCalculator;

impl DurationCalculator {
    /// Split the sequence into maximal same-label runs.
    ///
    /// A run still open at the end of the sequence is closed at the last sample.
    pub fn episodes(samples: &[Sample]) -> Vec<Episode> {
        let mut episodes: Vec<Episode> = Vec::new();

        for sample in samples {
            match episodes.last_mut() {
                Some(current) if current.label == sample.label => {
                    current.end = sample.timestamp;
                    current.length += 1;
                }
                _ => episodes.push(Episode {
                    label: sample.label.clone(),
                    start: sample.timestamp,
                    end: sample.timestamp,
                    length: 1,
                }),
            }
        }

        episodes
    }

    /// Per-label episode statistics, sorted by episode count descending.
    ///
    /// Ties keep first-seen order.
    pub fn compute(samples: &[Sample], step_days: u32) -> Vec<DurationStat> {
        let weeks_per_sample = f64::from(step_days) / 7.0;

        let mut by_label: IndexMap<RegimeLabel, Vec<f64>> = IndexMap::new();
        for episode in Self::episodes(samples) {
            by_label
                .entry(episode.label)
                .or_default()
                .push(episode.length as f64 * weeks_per_sample);
        }

        let mut stats: Vec<DurationStat> = by_label
            .into_iter()
            .map(|(label, weeks)| summarize(label, weeks))
            .collect();

        // sort_by is stable
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats
    }
}

fn summarize(label: RegimeLabel, mut weeks: Vec<f64>) -> DurationStat {
    let count = weeks.len();
    let mean_weeks = weeks.iter().sum::<f64>() / count as f64;
    let max_weeks = weeks.iter().copied().fold(0.0, f64::max);

    weeks.sort_by(f64::total_cmp);
    let mid = count / 2;
    let median_weeks = if count % 2 == 0 {
        (weeks[mid - 1] + weeks[mid]) / 2.0
    } else {
        weeks[mid]
    };

    DurationStat {
        label,
        count,
        median_weeks,
        mean_weeks,
        max_weeks,
    }
}
