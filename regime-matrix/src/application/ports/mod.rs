mod clock;
mod matrix_store;
mod sample_source;

pub use clock::Clock;
pub use matrix_store::MatrixStore;
pub use sample_source::SampleSource;
