//! Property and scenario tests for the transition matrix pipeline
//!
//! Random label sequences are drawn from a seeded RNG so failures reproduce.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use regime_matrix::{
    DurationCalculator, FixedClock, InMemoryMatrixStore, InMemorySampleSource, MatrixError,
    MatrixStore, RegimeLabel, RiskPropagator, Sample, TransitionMatrix, TransitionMatrixBuilder,
    application::{ComputeError, ComputeMatrixCommand, ComputeMatrixUseCase, MAX_CHECKPOINTS},
};
use std::sync::Arc;

const VOCABULARY: [&str; 4] = [
    "LIQUIDITY_EXPANSION",
    "RISK_OFF_STRESS",
    "TIGHTENING_USD_SUPPORTIVE",
    "NEUTRAL",
];

fn label(s: &str) -> RegimeLabel {
    RegimeLabel::new(s).unwrap()
}

fn sequence(labels: &[&str], step_days: u32) -> Vec<Sample> {
    let start = Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap();
    labels
        .iter()
        .enumerate()
        .map(|(i, l)| Sample::new(start + Duration::days(i64::from(step_days) * i as i64), label(l)))
        .collect()
}

fn random_sequence(rng: &mut StdRng, len: usize, step_days: u32) -> Vec<Sample> {
    let labels: Vec<&str> = (0..len)
        .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
        .collect();
    sequence(&labels, step_days)
}

fn assert_well_formed(m: &TransitionMatrix) {
    let n = m.dimension();
    assert!(m.is_square());
    assert_eq!(m.matrix().len(), n);
    assert_eq!(m.row_sums().len(), n);
    assert!(m.is_row_stochastic());
    for row in m.matrix() {
        assert_eq!(row.len(), n);
        assert!(row.iter().all(|p| (0.0..=1.0).contains(p)));
        let sum: f64 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "row sums to {}", sum);
    }
}

// ============================================================================
// Properties over random sequences
// ============================================================================

#[test]
fn test_random_sequences_are_row_stochastic() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.gen_range(2..60);
        let alpha = [0.0, 0.25, 1.0, 3.0][rng.gen_range(0..4)];
        let samples = random_sequence(&mut rng, len, 7);

        let m = TransitionMatrixBuilder::new(7, alpha).build(&samples).unwrap();
        assert_well_formed(&m);
        assert_eq!(m.meta().samples, len - 1);

        let transitions: u64 = m.counts().iter().flatten().sum();
        assert_eq!(transitions as usize, len - 1);
    }
}

#[test]
fn test_build_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let samples = random_sequence(&mut rng, 30, 7);
        let builder = TransitionMatrixBuilder::new(7, 1.0);
        let a = builder.build(&samples).unwrap();
        let b = builder.build(&samples).unwrap();
        assert_eq!(a.matrix(), b.matrix());
        assert_eq!(a.labels(), b.labels());
    }
}

#[test]
fn test_propagated_risk_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(1234);
    let stress = [label("RISK_OFF_STRESS")];

    for _ in 0..100 {
        let samples = random_sequence(&mut rng, 40, 7);
        let vocabulary = VOCABULARY.iter().map(|l| label(l)).collect();
        let m = TransitionMatrixBuilder::new(7, 1.0)
            .with_vocabulary(vocabulary)
            .build(&samples)
            .unwrap();

        let current = &samples[samples.len() - 1].label;
        let metrics = RiskPropagator::derive(&m, current, &stress).unwrap();
        for p in [
            metrics.risk_to_stress.p1w,
            metrics.risk_to_stress.p2w,
            metrics.risk_to_stress.p4w,
        ] {
            assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[test]
fn test_durations_cover_every_sample() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let len = rng.gen_range(1..50);
        let samples = random_sequence(&mut rng, len, 7);

        let episodes = DurationCalculator::episodes(&samples);
        let covered: usize = episodes.iter().map(|e| e.length).sum();
        assert_eq!(covered, len);

        let stats = DurationCalculator::compute(&samples, 7);
        let total_weeks: f64 = stats.iter().map(|s| s.mean_weeks * s.count as f64).sum();
        assert!((total_weeks - len as f64).abs() < 1e-9);
        assert_eq!(stats.iter().map(|s| s.count).sum::<usize>(), episodes.len());
        assert!(stats.windows(2).all(|w| w[0].count >= w[1].count));
        for s in &stats {
            assert!(s.median_weeks <= s.max_weeks);
            assert!(s.mean_weeks <= s.max_weeks);
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_alternating_regimes_flip() {
    let labels: Vec<&str> = (0..10)
        .map(|i| if i % 2 == 0 { "LIQUIDITY_EXPANSION" } else { "RISK_OFF_STRESS" })
        .collect();
    let m = TransitionMatrixBuilder::new(7, 1.0)
        .build(&sequence(&labels, 7))
        .unwrap();

    let a = label("LIQUIDITY_EXPANSION");
    let b = label("RISK_OFF_STRESS");
    assert!(m.probability(&a, &b).unwrap() > 0.8);
    assert!(m.probability(&b, &a).unwrap() > 0.8);
    assert!(m.probability(&a, &a).unwrap() < 0.2);
    assert!(m.probability(&b, &b).unwrap() < 0.2);
}

#[test]
fn test_persistent_regimes() {
    let mut labels = Vec::new();
    labels.extend(["LIQUIDITY_EXPANSION"; 5]);
    labels.extend(["RISK_OFF_STRESS"; 4]);
    labels.extend(["TIGHTENING_USD_SUPPORTIVE"; 6]);
    let samples = sequence(&labels, 7);

    let m = TransitionMatrixBuilder::new(7, 1.0).build(&samples).unwrap();
    for l in ["LIQUIDITY_EXPANSION", "RISK_OFF_STRESS", "TIGHTENING_USD_SUPPORTIVE"] {
        let diag = m.probability(&label(l), &label(l)).unwrap();
        assert!(diag > 0.5, "{} self-transition {}", l, diag);
    }

    let stats = DurationCalculator::compute(&samples, 7);
    assert_eq!(stats.len(), 3);
    assert!(stats.iter().all(|s| s.max_weeks >= 4.0));
}

#[test]
fn test_absorbing_stress() {
    let m = TransitionMatrixBuilder::new(7, 0.0)
        .build(&sequence(&["LIQUIDITY_EXPANSION", "RISK_OFF_STRESS", "RISK_OFF_STRESS", "RISK_OFF_STRESS"], 7))
        .unwrap();

    let metrics = RiskPropagator::derive(&m, &label("RISK_OFF_STRESS"), &[label("RISK_OFF_STRESS")])
        .unwrap();
    assert_eq!(metrics.risk_to_stress.p1w, 1.0);
    assert_eq!(metrics.risk_to_stress.p2w, 1.0);
    assert_eq!(metrics.risk_to_stress.p4w, 1.0);

    // Starting outside stress, risk is reached in one step and never leaves
    let from_expansion =
        RiskPropagator::derive(&m, &label("LIQUIDITY_EXPANSION"), &[label("RISK_OFF_STRESS")]).unwrap();
    assert_eq!(from_expansion.risk_to_stress.p1w, 1.0);
    assert_eq!(from_expansion.risk_to_stress.p4w, 1.0);
}

#[tokio::test]
async fn test_empty_range_leaves_store_untouched() {
    let clock = Arc::new(FixedClock::default());
    let source = Arc::new(InMemorySampleSource::with_observations(sequence(
        &["LIQUIDITY_EXPANSION", "RISK_OFF_STRESS", "LIQUIDITY_EXPANSION"],
        7,
    )));
    let store = Arc::new(InMemoryMatrixStore::new());
    let use_case = ComputeMatrixUseCase::new(clock, source, Arc::clone(&store));

    let result = use_case
        .execute(ComputeMatrixCommand {
            from: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2019, 12, 31).unwrap(),
            step_days: 7,
            alpha: 1.0,
            labels: None,
        })
        .await;

    assert_eq!(
        result.unwrap_err(),
        ComputeError::Matrix(MatrixError::InsufficientData { samples: 0 })
    );
    assert!(store.current().await.is_none());
}

#[tokio::test]
async fn test_compute_through_use_case() {
    let clock = Arc::new(FixedClock::default());
    let source = Arc::new(InMemorySampleSource::with_observations(sequence(
        &["LIQUIDITY_EXPANSION", "RISK_OFF_STRESS", "LIQUIDITY_EXPANSION", "RISK_OFF_STRESS"],
        7,
    )));
    let store = Arc::new(InMemoryMatrixStore::new());
    let use_case = ComputeMatrixUseCase::new(clock, source, Arc::clone(&store));

    let snapshot = use_case
        .execute(ComputeMatrixCommand {
            from: NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
            to: NaiveDate::from_ymd_opt(2022, 1, 24).unwrap(),
            step_days: 7,
            alpha: 1.0,
            labels: None,
        })
        .await
        .unwrap();

    assert_well_formed(&snapshot.matrix);
    assert_eq!(snapshot.last_label, label("RISK_OFF_STRESS"));
    let stored = store.current().await.unwrap();
    assert!(Arc::ptr_eq(&stored, &snapshot));
}

#[tokio::test]
async fn test_compute_rejects_unbounded_sampling() {
    let clock = Arc::new(FixedClock::default());
    let source = Arc::new(InMemorySampleSource::with_observations(sequence(
        &["LIQUIDITY_EXPANSION", "RISK_OFF_STRESS"],
        7,
    )));
    let store = Arc::new(InMemoryMatrixStore::new());
    let use_case = ComputeMatrixUseCase::new(clock, source, Arc::clone(&store));

    let command = |from: NaiveDate, to: NaiveDate, step_days: u32| ComputeMatrixCommand {
        from,
        to,
        step_days,
        alpha: 1.0,
        labels: None,
    };
    let jan = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
    let dec = NaiveDate::from_ymd_opt(2022, 12, 26).unwrap();

    assert_eq!(
        use_case.execute(command(jan, dec, u32::MAX)).await.unwrap_err(),
        ComputeError::Matrix(MatrixError::InvalidStep(u32::MAX))
    );
    assert!(matches!(
        use_case
            .execute(command(NaiveDate::MIN, NaiveDate::MAX, 1))
            .await
            .unwrap_err(),
        ComputeError::RangeTooLarge { max: MAX_CHECKPOINTS, .. }
    ));
    assert!(store.current().await.is_none());
}
