pub mod clock;
pub mod config;
pub mod repositories;

pub use clock::{FixedClock, SystemClock};
pub use config::{ConfigError, EngineConfig, MatrixConfig, ServerConfig};
pub use repositories::{InMemoryMatrixStore, InMemorySampleSource};
