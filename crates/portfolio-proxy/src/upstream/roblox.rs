//! Roblox thumbnails and presence.

use axum::body::Bytes;
use serde::Deserialize;
use serde_json::Value;

use portfolio_core::presence::{fetch_first_ok, presence_request_body};
use portfolio_core::PortfolioError;

use crate::error::ProxyError;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarOptions {
    pub size: String,
    pub format: String,
    pub is_circular: bool,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: "150x150".to_string(),
            format: "Png".to_string(),
            is_circular: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThumbnailResponse {
    #[serde(default)]
    data: Vec<ThumbnailEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThumbnailEntry {
    image_url: Option<String>,
}

/// Avatar image bytes and their content type.
pub struct AvatarImage {
    pub content_type: String,
    pub bytes: Bytes,
}

fn transport(err: reqwest::Error) -> ProxyError {
    ProxyError::Internal(format!("Internal proxy error: {}", err))
}

/// Resolve the headshot URL for `user_id`, then download it.
pub async fn fetch_avatar(
    state: &AppState,
    user_id: &str,
    options: &AvatarOptions,
) -> Result<AvatarImage, ProxyError> {
    let mut url = url::Url::parse(&state.config.thumbnail_api_base)
        .map_err(|e| ProxyError::NotConfigured(format!("THUMBNAIL_API_BASE: {}", e)))?;
    url.query_pairs_mut()
        .append_pair("userIds", user_id)
        .append_pair("size", &options.size)
        .append_pair("format", &options.format)
        .append_pair("isCircular", if options.is_circular { "true" } else { "false" });

    let response = state.http.get(url).send().await.map_err(transport)?;
    if !response.status().is_success() {
        tracing::warn!(status = response.status().as_u16(), user_id, "thumbnail API error");
        return Err(ProxyError::Upstream("Thumbnail API error".to_string()));
    }
    let body: ThumbnailResponse = response.json().await.map_err(transport)?;
    let image_url = body
        .data
        .into_iter()
        .next()
        .and_then(|entry| entry.image_url)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ProxyError::NotFound("No thumbnail URL".to_string()))?;

    let image = state.http.get(&image_url).send().await.map_err(transport)?;
    if !image.status().is_success() {
        tracing::warn!(status = image.status().as_u16(), %image_url, "avatar image fetch failed");
        return Err(ProxyError::Upstream("Failed to fetch image".to_string()));
    }
    let content_type = image
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/png")
        .to_string();
    let bytes = image.bytes().await.map_err(transport)?;

    Ok(AvatarImage {
        content_type,
        bytes,
    })
}

/// Primary endpoint, then fallback. Both failing is a 502.
pub async fn fetch_presence(state: &AppState, user_id: u64) -> Result<Value, ProxyError> {
    let body = presence_request_body(&[user_id]);
    fetch_first_ok(
        &state.http,
        &state.config.presence_endpoints(),
        &body,
        state.config.upstream_timeout(),
    )
    .await
    .map_err(|e: PortfolioError| {
        tracing::warn!(user_id, error = %e, "all presence endpoints failed");
        ProxyError::Upstream("No presence data from endpoints".to_string())
    })
}
