use axum::extract::{Path, Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::ProxyError;
use crate::state::AppState;
use crate::upstream::roblox::{fetch_avatar, AvatarOptions};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarQuery {
    pub size: Option<String>,
    pub format: Option<String>,
    pub is_circular: Option<String>,
}

impl AvatarQuery {
    fn options(&self) -> AvatarOptions {
        let defaults = AvatarOptions::default();
        AvatarOptions {
            size: self.size.clone().filter(|s| !s.is_empty()).unwrap_or(defaults.size),
            format: self
                .format
                .clone()
                .filter(|f| !f.is_empty())
                .unwrap_or(defaults.format),
            is_circular: self
                .is_circular
                .as_deref()
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.is_circular),
        }
    }
}

/// GET /api/avatar/:id - relay the user's headshot image
pub async fn avatar_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AvatarQuery>,
) -> Result<Response, ProxyError> {
    let image = fetch_avatar(&state, &id, &query.options()).await?;
    tracing::debug!(user_id = %id, bytes = image.bytes.len(), "avatar relayed");
    Ok((
        [
            (CONTENT_TYPE, image.content_type),
            (CACHE_CONTROL, "public, max-age=60".to_string()),
        ],
        image.bytes,
    )
        .into_response())
}
