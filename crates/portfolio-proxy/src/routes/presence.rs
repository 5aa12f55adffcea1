use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ProxyError;
use crate::state::AppState;
use crate::upstream::roblox::fetch_presence;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRequest {
    #[serde(default)]
    pub user_ids: Vec<Value>,
}

impl PresenceRequest {
    /// Ids as numbers; numeric strings are accepted, anything else skipped.
    pub fn ids(&self) -> Vec<u64> {
        self.user_ids
            .iter()
            .filter_map(|v| match v {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .collect()
    }
}

/// POST /api/presence - presence of the first requested user
///
/// The body is parsed leniently: anything without a usable id is a 400.
pub async fn presence_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let request: PresenceRequest = serde_json::from_slice(&body).unwrap_or_default();
    let user_id = request
        .ids()
        .first()
        .copied()
        .ok_or_else(|| ProxyError::BadRequest("userIds required".to_string()))?;

    if let Some(mut cached) = state.presence_cache.get(&user_id) {
        if let Value::Object(map) = &mut cached {
            map.insert("fromCache".to_string(), Value::Bool(true));
        }
        return Ok(Json(cached));
    }

    let data = fetch_presence(&state, user_id).await?;
    state.presence_cache.insert(user_id, data.clone());
    Ok(Json(data))
}
