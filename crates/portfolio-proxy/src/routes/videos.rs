use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use portfolio_core::video::sort_newest_first;
use portfolio_core::{VideoItem, VideoList, VideoSource};

use crate::error::ProxyError;
use crate::state::AppState;
use crate::upstream::youtube;

pub const MAX_RESULTS_LIMIT: usize = 50;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosQuery {
    pub max_results: Option<usize>,
}

impl VideosQuery {
    /// Requested count clamped to 1..=50; `None` means everything.
    pub fn limit(&self) -> Option<usize> {
        self.max_results.map(|n| n.clamp(1, MAX_RESULTS_LIMIT))
    }
}

/// GET /api/videos - channel uploads, newest first
pub async fn videos_handler(
    State(state): State<AppState>,
    Query(query): Query<VideosQuery>,
) -> Result<Json<VideoList>, ProxyError> {
    let (source, mut items) = match state.videos_cache.fresh() {
        Some(items) => (VideoSource::Cache, items),
        None => (VideoSource::Api, refresh(&state).await?),
    };
    if let Some(limit) = query.limit() {
        items.truncate(limit);
    }
    Ok(Json(VideoList { source, items }))
}

async fn refresh(state: &AppState) -> Result<Vec<VideoItem>, ProxyError> {
    let creds = state.youtube.as_ref().ok_or_else(|| {
        ProxyError::NotConfigured("missing YT_API_KEY or YT_CHANNEL_ID".to_string())
    })?;
    let api_base = &state.config.youtube_api_base;

    let playlist = youtube::uploads_playlist_id(&state.http, api_base, creds)
        .await?
        .ok_or_else(|| {
            ProxyError::Internal("Could not determine uploads playlist for channel".to_string())
        })?;

    let mut items = youtube::playlist_videos(&state.http, api_base, creds, &playlist).await?;
    sort_newest_first(&mut items);
    tracing::info!(count = items.len(), "channel videos refreshed");

    state.videos_cache.set(items.clone());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(VideosQuery { max_results: None }.limit(), None);
        assert_eq!(VideosQuery { max_results: Some(0) }.limit(), Some(1));
        assert_eq!(VideosQuery { max_results: Some(12) }.limit(), Some(12));
        assert_eq!(VideosQuery { max_results: Some(500) }.limit(), Some(50));
    }
}
