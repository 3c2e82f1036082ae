use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::Clock;
use crate::infrastructure::{InMemoryMatrixStore, InMemorySampleSource, MatrixConfig};

/// Application state shared across handlers - uses concrete infrastructure types
pub struct AppState<C: Clock> {
    pub clock: Arc<C>,
    pub sample_source: Arc<InMemorySampleSource>,
    pub matrix_store: Arc<InMemoryMatrixStore>,
    /// Defaults for requests that leave fields out
    pub matrix_config: MatrixConfig,
}

impl<C: Clock> AppState<C> {
    pub fn new(
        clock: Arc<C>,
        sample_source: Arc<InMemorySampleSource>,
        matrix_store: Arc<InMemoryMatrixStore>,
        matrix_config: MatrixConfig,
    ) -> Self {
        AppState {
            clock,
            sample_source,
            matrix_store,
            matrix_config,
        }
    }
}

/// Create the REST API router
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::<C>))
        // Transition matrix
        .route(
            "/api/regime/transition/compute",
            post(handlers::compute::<C>),
        )
        .route(
            "/api/regime/transition/current",
            get(handlers::current::<C>),
        )
        .route("/api/regime/transition/matrix", get(handlers::matrix::<C>))
        .route(
            "/api/regime/transition/durations",
            get(handlers::durations::<C>),
        )
        // Sample ingestion
        .route("/api/regime/samples", post(handlers::ingest_samples::<C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
