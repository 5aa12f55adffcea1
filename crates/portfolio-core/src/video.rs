//! Channel video records as served by the proxy's `/api/videos` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::PLACEHOLDER_IMAGE;
use crate::entity::{youtube_watch_url, Entity, EntityKind, MediaItem};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The thumbnail set YouTube attaches to a snippet. Every size is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// Largest of high / medium / default that is present.
    pub fn best(&self) -> Option<&str> {
        [&self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .map(|t| t.url.as_str())
            .find(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

impl VideoItem {
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Card for the projects grid. The gallery holds the embeddable video.
    pub fn to_entity(&self) -> Entity {
        let cover = self.thumbnails.best().unwrap_or(PLACEHOLDER_IMAGE);
        let name = if self.title.trim().is_empty() {
            self.video_id.clone()
        } else {
            self.title.clone()
        };
        Entity::new(self.video_id.clone(), EntityKind::Video, name, cover)
            .with_media(vec![MediaItem::YouTube(self.video_id.clone())])
            .with_description(self.description.clone())
            .with_link(youtube_watch_url(&self.video_id))
    }
}

/// Sort newest first. Items without a parsable date go last, keeping their order.
pub fn sort_newest_first(items: &mut [VideoItem]) {
    items.sort_by(|a, b| b.published().cmp(&a.published()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Cache,
    Api,
}

/// Body of `GET /api/videos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoList {
    pub source: VideoSource,
    pub items: Vec<VideoItem>,
}
