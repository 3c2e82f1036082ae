mod compute_matrix;
mod get_current;
mod get_durations;
mod ingest_samples;

pub use compute_matrix::{
    ComputeError, ComputeMatrixCommand, ComputeMatrixUseCase, MAX_CHECKPOINTS,
};
pub use get_current::{CurrentMatrix, GetCurrentQuery, GetCurrentUseCase, QueryError};
pub use get_durations::GetDurationsUseCase;
pub use ingest_samples::{IngestResult, IngestSamplesUseCase};
