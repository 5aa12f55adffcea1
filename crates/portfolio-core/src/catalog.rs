//! Static site content: games, projects, store products and the About section.
//!
//! To add a game, append to [`games`]. Products only carry their YouTube id,
//! checkout URL and price here; title and description are resolved from the
//! channel videos at runtime, falling back to [`FALLBACK_PRODUCT`].

use crate::entity::{roblox_game_url, Entity, EntityKind, EntityList, MediaItem};
use crate::video::VideoItem;

/// Image used whenever a card has nothing better to show.
pub const PLACEHOLDER_IMAGE: &str = "img/MultiGameInc.webp";

/// Local stand-in for a card whose metadata could not be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRecord {
    pub name: &'static str,
    pub description: &'static str,
}

pub const FALLBACK_PRODUCT: FallbackRecord = FallbackRecord {
    name: "Product",
    description: "Description unavailable",
};

struct GameSpec {
    place_id: u64,
    name: &'static str,
    icon: &'static str,
    cover: &'static str,
    images: &'static [&'static str],
    description: &'static str,
}

const GAMES: &[GameSpec] = &[
    GameSpec {
        place_id: 16125269940,
        name: "Anime Color Block Run",
        icon: "img/AnimeColor_icon.webp",
        cover: "img/AnimeColor_Cover.webp",
        images: &[
            "img/AnimeColor_Cover.webp",
            "img/NextGame_Cover.webp",
            "img/Sea.webp",
        ],
        description: "Run across colored blocks on a dynamic map. Weekly updates with new tracks and improvements!",
    },
    GameSpec {
        place_id: 71541333892738,
        name: "Bloxidextro",
        icon: "img/Bloxidextro_icon.webp",
        cover: "img/Bloxidextro_Cover.webp",
        images: &["img/Bloxidextro_Cover.webp", "img/Bloxidextro_icon.webp"],
        description: "Experimental game with a custom menu and unique mechanics. Optimized for mobile and PC.",
    },
    GameSpec {
        place_id: 17166282321,
        name: "Next Game Soon",
        icon: "img/NextGame_icon.webp",
        cover: "img/NextGame_Cover.webp",
        images: &["img/NextGame_Cover.webp"],
        description: "Next game, currently in development. Stay tuned for updates.",
    },
];

/// The Roblox games, in display order.
pub fn games() -> EntityList {
    let entities = GAMES
        .iter()
        .map(|g| {
            Entity::new(g.place_id.to_string(), EntityKind::Game, g.name, g.cover)
                .with_icon(g.icon)
                .with_images(g.images.iter().copied())
                .with_description(g.description)
                .with_link(roblox_game_url(g.place_id))
        })
        .collect();
    // Static table: ids are distinct place ids.
    EntityList::new(entities).unwrap_or_default()
}

/// Image projects shown before the channel videos.
pub fn static_projects() -> Vec<Entity> {
    vec![
        Entity::new("nodes", EntityKind::Project, "Nodes System", "img/Nodos.webp"),
        Entity::new(
            "nodesDemo",
            EntityKind::Project,
            "Nodes System Demo",
            "img/NodosDemostracion.webp",
        )
        .with_description("Visual connections between nodes."),
    ]
}

/// Static projects followed by the channel videos. Videos whose id collides
/// with an earlier card are dropped.
pub fn projects(videos: &[VideoItem]) -> EntityList {
    let mut entities = static_projects();
    for video in videos {
        if entities.iter().all(|e| e.id != video.video_id) {
            entities.push(video.to_entity());
        }
    }
    EntityList::new(entities).unwrap_or_default()
}

/// A store listing before its metadata is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    pub youtube_id: &'static str,
    pub checkout_url: &'static str,
    pub price: &'static str,
}

pub const PRODUCTS: &[ProductListing] = &[
    ProductListing {
        youtube_id: "iUatLzmCRtE",
        checkout_url: "https://pimpolidev.gumroad.com/l/wyfdgk",
        price: "$3.00 USD",
    },
    ProductListing {
        youtube_id: "8G_FWh10mqU",
        checkout_url: "https://pimpolidev.gumroad.com/l/rxlko",
        price: "$8.00 USD",
    },
];

/// Build product cards from listings and whatever video metadata was fetched.
///
/// A listing without matching metadata gets the fallback record and the
/// placeholder image so the card is never empty.
pub fn resolve_products(listings: &[ProductListing], metadata: &[VideoItem]) -> EntityList {
    let entities = listings
        .iter()
        .map(|listing| {
            let base = match metadata.iter().find(|v| v.video_id == listing.youtube_id) {
                Some(video) => Entity::new(
                    listing.youtube_id,
                    EntityKind::Product,
                    video.title.clone(),
                    video.thumbnails.best().unwrap_or(PLACEHOLDER_IMAGE),
                )
                .with_description(video.description.clone()),
                None => Entity::new(
                    listing.youtube_id,
                    EntityKind::Product,
                    FALLBACK_PRODUCT.name,
                    PLACEHOLDER_IMAGE,
                )
                .with_description(FALLBACK_PRODUCT.description),
            };
            let base = if base.name.trim().is_empty() {
                Entity { name: FALLBACK_PRODUCT.name.to_string(), ..base }
            } else {
                base
            };
            base.with_media(vec![MediaItem::YouTube(listing.youtube_id.to_string())])
                .with_link(listing.checkout_url)
                .with_price(listing.price)
        })
        .collect();
    EntityList::new(entities).unwrap_or_default()
}

/// Products with no metadata at all (what the grid shows when the fetch fails).
pub fn fallback_products() -> EntityList {
    resolve_products(PRODUCTS, &[])
}

/// Purchase button label: "Buy <name> for <price>".
pub fn purchase_label(entity: &Entity, buy_word: &str, for_word: &str) -> String {
    format!(
        "{} {} {} {}",
        buy_word,
        entity.name,
        for_word,
        entity.price.as_deref().unwrap_or_default()
    )
    .trim_end()
    .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FounderLink {
    pub text: &'static str,
    pub icon: &'static str,
    pub icon_alt: &'static str,
    pub url: &'static str,
}

/// Content of the About section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    pub title: &'static str,
    pub description: &'static str,
    pub info: &'static [InfoItem],
    pub founder: FounderLink,
}

pub const ABOUT: About = About {
    title: "About Me",
    description: "I am a Roblox developer with more than three years of experience. \
I build realistic procedural wave systems, optimize scripts and games, \
and develop PvP powers for NPCs.",
    info: &[
        InfoItem { label: "Years of Experience:", value: "+3 years" },
        InfoItem { label: "Primary Language & Engine:", value: "Lua / Roblox Studio" },
        InfoItem {
            label: "Secondary Language & Engine:",
            value: "GDScript / Godot (basic level)",
        },
    ],
    founder: FounderLink {
        text: "Founder of Multi Game Inc",
        icon: "img/MultiGameInc.png",
        icon_alt: "Roblox Group",
        url: "https://www.roblox.com/communities/17387910/Multi-Game-Inc#!/about",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::{Thumbnail, Thumbnails};

    #[test]
    fn games_have_links_and_galleries() {
        let games = games();
        assert_eq!(games.len(), 3);
        let first = games.get("16125269940").unwrap();
        assert_eq!(first.images.len(), 3);
        assert_eq!(
            first.link.as_deref(),
            Some("https://www.roblox.com/games/16125269940")
        );
        let last = games.get("17166282321").unwrap();
        assert_eq!(last.images.len(), 1);
    }

    #[test]
    fn products_fall_back_without_metadata() {
        let products = fallback_products();
        assert_eq!(products.len(), 2);
        for product in &products {
            assert_eq!(product.name, FALLBACK_PRODUCT.name);
            assert_eq!(product.description, FALLBACK_PRODUCT.description);
            assert_eq!(product.cover_url, PLACEHOLDER_IMAGE);
            assert!(product.price.is_some());
        }
    }

    #[test]
    fn products_use_matching_metadata() {
        let meta = vec![VideoItem {
            video_id: "iUatLzmCRtE".into(),
            title: "Wave System".into(),
            description: "Procedural waves".into(),
            published_at: String::new(),
            thumbnails: Thumbnails {
                high: Some(Thumbnail { url: "thumb.jpg".into(), ..Default::default() }),
                ..Default::default()
            },
        }];
        let products = resolve_products(PRODUCTS, &meta);
        let resolved = products.get("iUatLzmCRtE").unwrap();
        assert_eq!(resolved.name, "Wave System");
        assert_eq!(resolved.cover_url, "thumb.jpg");
        let missing = products.get("8G_FWh10mqU").unwrap();
        assert_eq!(missing.name, FALLBACK_PRODUCT.name);
    }

    #[test]
    fn purchase_label_format() {
        let product = &fallback_products().into_vec()[0];
        assert_eq!(
            purchase_label(product, "Buy", "for"),
            "Buy Product for $3.00 USD"
        );
    }

    #[test]
    fn projects_skip_duplicate_video_ids() {
        let videos = vec![
            VideoItem {
                video_id: "v1".into(),
                title: "One".into(),
                description: String::new(),
                published_at: String::new(),
                thumbnails: Thumbnails::default(),
            };
            2
        ];
        let list = projects(&videos);
        assert_eq!(list.len(), 3);
    }
}
