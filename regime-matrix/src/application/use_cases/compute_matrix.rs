use crate::application::ports::{Clock, MatrixStore, SampleSource};
use crate::domain::{
    DurationCalculator, MAX_STEP_DAYS, MatrixError, MatrixSnapshot, RegimeLabel,
    TransitionMatrixBuilder,
};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Most checkpoints a single compute may sample
pub const MAX_CHECKPOINTS: i64 = 20_000;

#[derive(Debug, Clone)]
pub struct ComputeMatrixCommand {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub step_days: u32,
    pub alpha: f64,
    /// Fixed vocabulary; `None` uses first-appearance order
    pub labels: Option<Vec<RegimeLabel>>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    #[error("Invalid range: from {from} is after to {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Range too large: {checkpoints} checkpoints exceeds the limit of {max}")]
    RangeTooLarge { checkpoints: i64, max: i64 },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Fetch samples, build matrix and durations, make them current
pub struct ComputeMatrixUseCase<C, S, M>
where
    C: Clock,
    S: SampleSource,
    M: MatrixStore,
{
    clock: Arc<C>,
    sample_source: Arc<S>,
    store: Arc<M>,
}

impl<C, S, M> ComputeMatrixUseCase<C, S, M>
where
    C: Clock,
    S: SampleSource,
    M: MatrixStore,
{
    pub fn new(clock: Arc<C>, sample_source: Arc<S>, store: Arc<M>) -> Self {
        Self {
            clock,
            sample_source,
            store,
        }
    }

    /// The store is only touched once the whole snapshot is built
    pub async fn execute(
        &self,
        command: ComputeMatrixCommand,
    ) -> Result<Arc<MatrixSnapshot>, ComputeError> {
        if command.from > command.to {
            return Err(ComputeError::InvalidRange {
                from: command.from,
                to: command.to,
            });
        }
        if command.step_days == 0 || command.step_days > MAX_STEP_DAYS {
            return Err(MatrixError::InvalidStep(command.step_days).into());
        }
        let checkpoints =
            (command.to - command.from).num_days() / i64::from(command.step_days) + 1;
        if checkpoints > MAX_CHECKPOINTS {
            return Err(ComputeError::RangeTooLarge {
                checkpoints,
                max: MAX_CHECKPOINTS,
            });
        }

        let samples = self
            .sample_source
            .samples(command.from, command.to, command.step_days)
            .await;

        let mut builder = TransitionMatrixBuilder::new(command.step_days, command.alpha);
        if let Some(labels) = command.labels {
            builder = builder.with_vocabulary(labels);
        }
        let matrix = builder.build(&samples)?;
        let durations = DurationCalculator::compute(&samples, command.step_days);

        // build() rejects fewer than two samples
        let last_label = match samples.last() {
            Some(sample) => sample.label.clone(),
            None => return Err(MatrixError::InsufficientData { samples: 0 }.into()),
        };

        let snapshot = MatrixSnapshot::new(matrix, durations, last_label, self.clock.now());
        let snapshot = self.store.replace(snapshot).await;

        tracing::info!(
            id = %snapshot.id,
            labels = snapshot.matrix.dimension(),
            transitions = snapshot.matrix.meta().samples,
            alpha = command.alpha,
            step_days = command.step_days,
            "Transition matrix replaced"
        );

        Ok(snapshot)
    }
}
