//! Liveness and readiness endpoints

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{AppError, errors::responses::ServiceUnavailableResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Name reported by the liveness probe.
pub const SERVICE_NAME: &str = "ofertmatch-api";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    #[schema(example = "ofertmatch-api")]
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub ok: bool,
    #[schema(example = "ready")]
    pub status: String,
    pub mongodb: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Always succeeds while the process is serving
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME.to_string(),
    })
}

/// Readiness check - verifies the MongoDB connection
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "Health",
    responses(
        (status = 200, description = "MongoDB answers", body = ReadinessResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, AppError> {
    let status = database::mongodb::check_health_detailed(&state.mongo_client).await;

    if !status.healthy {
        tracing::warn!(
            error = status.message.as_deref().unwrap_or("unknown"),
            response_time_ms = status.response_time_ms,
            "MongoDB not ready"
        );
        return Err(AppError::ServiceUnavailable(
            "MongoDB is not reachable".to_string(),
        ));
    }

    tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ready");
    Ok(Json(ReadinessResponse {
        ok: true,
        status: "ready".to_string(),
        mongodb: true,
    }))
}
