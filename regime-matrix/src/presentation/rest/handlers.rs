use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use std::sync::Arc;

use crate::application::{
    Clock, ComputeMatrixCommand, ComputeMatrixUseCase, GetCurrentQuery, GetCurrentUseCase,
    GetDurationsUseCase, IngestSamplesUseCase, MatrixStore, SampleSource,
};
use crate::domain::RegimeLabel;
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /api/health
pub async fn health<C: Clock>(State(state): State<Arc<AppState<C>>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        has_matrix: state.matrix_store.current().await.is_some(),
        observations: state.sample_source.observation_count().await,
    })
}

/// POST /api/regime/transition/compute
pub async fn compute<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Result<Json<MatrixResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;

    let command = ComputeMatrixCommand {
        from: req.from,
        to: req.to,
        step_days: req.step_days.unwrap_or(state.matrix_config.step_days),
        alpha: req.alpha.unwrap_or(state.matrix_config.alpha),
        labels: req.labels.or_else(|| state.matrix_config.vocabulary.clone()),
    };

    let use_case = ComputeMatrixUseCase::new(
        Arc::clone(&state.clock),
        Arc::clone(&state.sample_source),
        Arc::clone(&state.matrix_store),
    );

    let snapshot = use_case.execute(command).await?;

    Ok(Json(MatrixResponse {
        ok: true,
        snapshot_id: snapshot.id,
        computed_at: snapshot.computed_at,
        matrix: snapshot.matrix.clone(),
    }))
}

/// GET /api/regime/transition/current
pub async fn current<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    query: Result<Query<CurrentQuery>, QueryRejection>,
) -> Result<Json<CurrentResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::invalid_request(e.body_text()))?;

    let label = query.label.as_deref().map(parse_label).transpose()?;
    let stress_labels = query
        .stress_labels
        .as_deref()
        .map(parse_label_list)
        .transpose()?;

    let use_case = GetCurrentUseCase::new(
        Arc::clone(&state.matrix_store),
        state.matrix_config.stress_labels.clone(),
    );

    let result = use_case
        .execute(GetCurrentQuery {
            label,
            stress_labels,
        })
        .await?;

    let snapshot = result.snapshot;
    let durations = query
        .durations
        .unwrap_or(true)
        .then(|| snapshot.durations.clone());

    Ok(Json(CurrentResponse {
        ok: true,
        snapshot_id: snapshot.id,
        computed_at: snapshot.computed_at,
        matrix: snapshot.matrix.clone(),
        derived: result.derived,
        durations,
    }))
}

/// GET /api/regime/transition/matrix
pub async fn matrix<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<MatrixResponse>, ApiError> {
    let use_case = GetCurrentUseCase::new(Arc::clone(&state.matrix_store), Vec::new());
    let snapshot = use_case.snapshot().await?;

    Ok(Json(MatrixResponse {
        ok: true,
        snapshot_id: snapshot.id,
        computed_at: snapshot.computed_at,
        matrix: snapshot.matrix.clone(),
    }))
}

/// GET /api/regime/transition/durations
pub async fn durations<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<DurationsResponse>, ApiError> {
    let use_case = GetDurationsUseCase::new(Arc::clone(&state.matrix_store));
    let durations = use_case.execute().await?;

    Ok(Json(DurationsResponse { ok: true, durations }))
}

/// POST /api/regime/samples
pub async fn ingest_samples<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    payload: Result<Json<IngestRequest>, JsonRejection>,
) -> Result<Json<IngestResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::invalid_request(e.body_text()))?;

    let use_case = IngestSamplesUseCase::new(Arc::clone(&state.sample_source));
    let result = use_case.execute(req.samples).await;

    Ok(Json(IngestResponse {
        ok: true,
        ingested: result.ingested,
        total: result.total,
    }))
}

fn parse_label(raw: &str) -> Result<RegimeLabel, ApiError> {
    RegimeLabel::new(raw).map_err(|reason| ApiError::invalid_label(raw, reason))
}

/// Comma-separated labels; empty segments are ignored so `stressLabels=` means none
fn parse_label_list(raw: &str) -> Result<Vec<RegimeLabel>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_label)
        .collect()
}
