use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub ok: bool,
    /// A video list has been fetched at least once
    pub cached: bool,
    /// Unix milliseconds
    pub expires_at: Option<i64>,
}

/// GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        ok: true,
        cached: state.videos_cache.is_filled(),
        expires_at: state.videos_cache.expires_at().map(|t| t.timestamp_millis()),
    })
}
