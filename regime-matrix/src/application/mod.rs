pub mod ports;
pub mod use_cases;

pub use ports::{Clock, MatrixStore, SampleSource};
pub use use_cases::{
    ComputeError, ComputeMatrixCommand, ComputeMatrixUseCase, CurrentMatrix, GetCurrentQuery,
    GetCurrentUseCase, GetDurationsUseCase, IngestResult, IngestSamplesUseCase,
    MAX_CHECKPOINTS, QueryError,
};
