//! Regime Transition Matrix Engine
//!
//! Builds a discrete-time Markov transition matrix between market regimes
//! (`LIQUIDITY_EXPANSION`, `RISK_OFF_STRESS`, ...), derives the probability of
//! moving into stress regimes over 1/2/4 week horizons, and reports how long
//! each regime tends to last.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Labels, samples, the transition matrix and the pure services
//!   that build it, propagate risk and compute durations
//! - **Application**: Use cases and port interfaces (MatrixStore, SampleSource, Clock)
//! - **Infrastructure**: In-memory store and sample source, clocks, JSON config
//! - **Presentation**: REST API handlers
//!
//! # Example
//!
//! ```ignore
//! use regime_matrix::{EngineConfig, RegimeEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = RegimeEngine::from_config(EngineConfig::default());
//!     engine.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    DerivedRiskMetrics, DurationCalculator, DurationStat, MatrixError, MatrixMeta,
    MatrixSnapshot, RegimeLabel, RiskPropagator, RiskToStress, Sample, TransitionMatrix,
    TransitionMatrixBuilder,
};

pub use infrastructure::{
    ConfigError, EngineConfig, FixedClock, InMemoryMatrixStore, InMemorySampleSource,
    SystemClock,
};

pub use application::{Clock, ComputeMatrixCommand, MatrixStore, SampleSource};

pub use presentation::{AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The regime matrix server
pub struct RegimeEngine<C: Clock + 'static> {
    pub config: EngineConfig,
    pub clock: Arc<C>,
    pub sample_source: Arc<InMemorySampleSource>,
    pub matrix_store: Arc<InMemoryMatrixStore>,
}

impl<C: Clock + 'static> RegimeEngine<C> {
    /// Create an engine with the given clock, seeding the sample source from config
    pub fn with_clock(config: EngineConfig, clock: Arc<C>) -> Self {
        let sample_source = Arc::new(InMemorySampleSource::with_observations(
            config.seed_samples.iter().cloned(),
        ));
        let matrix_store = Arc::new(InMemoryMatrixStore::new());

        RegimeEngine {
            config,
            clock,
            sample_source,
            matrix_store,
        }
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.clock),
            Arc::clone(&self.sample_source),
            Arc::clone(&self.matrix_store),
            self.config.matrix.clone(),
        ));

        create_router(state)
    }

    /// Run the server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_address();
        let router = self.rest_router();

        tracing::info!("{} listening on {}", self.config.name, addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl RegimeEngine<SystemClock> {
    /// Create an engine on the wall clock
    pub fn from_config(config: EngineConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }
}
