//! Health-check handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sesame_core::types::Timestamp;

use crate::error::AppResult;
use crate::state::AppState;

/// Response body for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server_time: Timestamp,
}

/// GET /api/health
///
/// Round-trips the database so the check fails when the pool does.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let server_time: Timestamp = sqlx::query_scalar("SELECT now()")
        .fetch_one(&state.pool)
        .await?;

    Ok(Json(HealthResponse {
        status: "OK",
        server_time,
    }))
}
