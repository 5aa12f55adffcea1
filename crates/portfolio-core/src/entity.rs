//! Entity records: one game, project, product or video driving one card.
//!
//! Entities are built once (from the static catalog or a one-time fetch) and
//! are immutable afterwards. Both the card grid and the modal gallery read them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// What a card represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Game,
    Project,
    Product,
    Video,
}

/// One slide of the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "src", rename_all = "snake_case")]
pub enum MediaItem {
    Image(String),
    Video(String),
    YouTube(String),
}

const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "ogg"];

impl MediaItem {
    /// Classify a gallery URL by its extension.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let is_video = path
            .rsplit_once('.')
            .map(|(_, ext)| VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
            .unwrap_or(false);
        if is_video {
            MediaItem::Video(url)
        } else {
            MediaItem::Image(url)
        }
    }

    /// URL to put in the viewport element.
    pub fn src(&self) -> String {
        match self {
            MediaItem::Image(url) | MediaItem::Video(url) => url.clone(),
            MediaItem::YouTube(id) => youtube_embed_url(id),
        }
    }

    /// URL for the thumbnail strip.
    pub fn thumbnail(&self) -> String {
        match self {
            MediaItem::Image(url) | MediaItem::Video(url) => url.clone(),
            MediaItem::YouTube(id) => format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id),
        }
    }

    pub fn is_video(&self) -> bool {
        !matches!(self, MediaItem::Image(_))
    }
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?rel=0", video_id)
}

pub fn youtube_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

pub fn roblox_game_url(place_id: u64) -> String {
    format!("https://www.roblox.com/games/{}", place_id)
}

/// A card in one of the grids.
///
/// `images` is never empty: when no gallery is given it falls back to the cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
    pub name: String,
    pub icon_url: Option<String>,
    pub cover_url: String,
    pub images: Vec<MediaItem>,
    pub description: String,
    /// External page (Roblox game, YouTube watch page, checkout)
    pub link: Option<String>,
    pub price: Option<String>,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        kind: EntityKind,
        name: impl Into<String>,
        cover_url: impl Into<String>,
    ) -> Self {
        let cover_url = cover_url.into();
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            icon_url: None,
            images: vec![MediaItem::from_url(cover_url.clone())],
            cover_url,
            description: String::new(),
            link: None,
            price: None,
        }
    }

    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Replace the gallery. An empty list keeps the cover-only fallback.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<MediaItem> = images.into_iter().map(MediaItem::from_url).collect();
        if !images.is_empty() {
            self.images = images;
        }
        self
    }

    pub fn with_media(mut self, media: Vec<MediaItem>) -> Self {
        if !media.is_empty() {
            self.images = media;
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Card text: the first `limit` characters, trimmed, with `...` when cut.
    pub fn preview(&self, limit: usize) -> Option<String> {
        preview_text(&self.description, limit)
    }
}

pub fn preview_text(text: &str, limit: usize) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut out: String = text.chars().take(limit).collect::<String>().trim().to_string();
    if text.chars().count() > limit {
        out.push_str("...");
    }
    Some(out)
}

/// Ordered list of entities with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityList {
    entities: Vec<Entity>,
}

impl EntityList {
    pub fn new(entities: Vec<Entity>) -> PortfolioResult<Self> {
        let mut seen = HashSet::new();
        for entity in &entities {
            if entity.name.trim().is_empty() {
                return Err(PortfolioError::InvalidEntity(format!(
                    "entity {} has no name",
                    entity.id
                )));
            }
            if !seen.insert(entity.id.as_str()) {
                return Err(PortfolioError::DuplicateEntity(entity.id.clone()));
            }
        }
        Ok(Self { entities })
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub fn into_vec(self) -> Vec<Entity> {
        self.entities
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
