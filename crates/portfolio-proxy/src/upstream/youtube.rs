//! YouTube Data API v3: channel uploads as [`VideoItem`]s.

use serde::Deserialize;
use url::Url;

use portfolio_core::video::Thumbnails;
use portfolio_core::{PortfolioError, PortfolioResult, VideoItem};

use super::get_json;
use crate::config::YoutubeCredentials;

/// `playlistItems` page size (the API maximum).
pub const PAGE_SIZE: u32 = 50;
/// Pages fetched at most per refresh.
pub const MAX_PAGES: usize = 5;

const VIDEO_KIND: &str = "youtube#video";

#[derive(Debug, Deserialize)]
struct ChannelsResponse {
    #[serde(default)]
    items: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Channel {
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistPage {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    resource_id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    kind: String,
    video_id: Option<String>,
}

impl Snippet {
    /// Only real videos; playlists can also hold other resources.
    fn into_video(self) -> Option<VideoItem> {
        let resource = self.resource_id?;
        if resource.kind != VIDEO_KIND {
            return None;
        }
        Some(VideoItem {
            video_id: resource.video_id.filter(|id| !id.is_empty())?,
            title: self.title,
            description: self.description,
            published_at: self.published_at,
            thumbnails: self.thumbnails,
        })
    }
}

fn endpoint(api_base: &str, path: &str) -> PortfolioResult<Url> {
    Url::parse(&format!("{}/{}", api_base.trim_end_matches('/'), path))
        .map_err(|e| PortfolioError::NotConfigured(format!("YOUTUBE_API_BASE: {}", e)))
}

/// Id of the channel's uploads playlist, if the channel exists.
pub async fn uploads_playlist_id(
    http: &reqwest::Client,
    api_base: &str,
    creds: &YoutubeCredentials,
) -> PortfolioResult<Option<String>> {
    let mut url = endpoint(api_base, "channels")?;
    url.query_pairs_mut()
        .append_pair("part", "contentDetails")
        .append_pair("id", &creds.channel_id)
        .append_pair("key", &creds.api_key);

    let channels: ChannelsResponse = get_json(http, url).await?;
    Ok(channels
        .items
        .into_iter()
        .next()
        .and_then(|c| c.content_details)
        .and_then(|d| d.related_playlists)
        .and_then(|p| p.uploads))
}

/// Walk the playlist for at most [`MAX_PAGES`] pages.
pub async fn playlist_videos(
    http: &reqwest::Client,
    api_base: &str,
    creds: &YoutubeCredentials,
    playlist_id: &str,
) -> PortfolioResult<Vec<VideoItem>> {
    let mut videos = Vec::new();
    let mut page_token: Option<String> = None;

    for page in 0..MAX_PAGES {
        let mut url = endpoint(api_base, "playlistItems")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("part", "snippet")
                .append_pair("playlistId", playlist_id)
                .append_pair("maxResults", &PAGE_SIZE.to_string())
                .append_pair("key", &creds.api_key);
            if let Some(token) = &page_token {
                query.append_pair("pageToken", token);
            }
        }

        let body: PlaylistPage = get_json(http, url).await?;
        tracing::debug!(page, items = body.items.len(), "playlist page fetched");
        videos.extend(
            body.items
                .into_iter()
                .filter_map(|item| item.snippet)
                .filter_map(Snippet::into_video),
        );

        match body.next_page_token.filter(|t| !t.is_empty()) {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }
    Ok(videos)
}
