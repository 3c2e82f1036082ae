mod in_memory_matrix_store;
mod in_memory_sample_source;

pub use in_memory_matrix_store::InMemoryMatrixStore;
pub use in_memory_sample_source::InMemorySampleSource;
