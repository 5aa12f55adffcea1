//! Roblox presence: state model, payload decoder, HTTP client and poller.

mod client;
mod decode;
mod poller;

pub use client::{fetch_first_ok, presence_request_body, PresenceClient};
pub use decode::{decode_body, extract_record, LocationHint, PresenceRecord};
pub use poller::{PresencePoller, PresenceSource, PresenceStatus};

/// Shown while the avatar image cannot be loaded.
pub const AVATAR_PLACEHOLDER: &str = "data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='150' height='150'%3E%3Crect width='100%25' height='100%25' fill='%23ddd'/%3E%3Ctext x='50%25' y='50%25' font-size='14' text-anchor='middle' dominant-baseline='middle' fill='%23666'%3EAvatar%3C/text%3E%3C/svg%3E";

pub const DETECTING_TITLE: &str = "Detecting presence...";

/// Roblox presence as shown on the avatar ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresenceState {
    #[default]
    Offline,
    Online,
    InGame,
    InStudio,
    Invisible,
}

impl PresenceState {
    pub const ALL: [PresenceState; 5] = [
        PresenceState::Offline,
        PresenceState::Online,
        PresenceState::InGame,
        PresenceState::InStudio,
        PresenceState::Invisible,
    ];

    /// Roblox `userPresenceType` code. Anything outside 0..=4 is Offline.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PresenceState::Online,
            2 => PresenceState::InGame,
            3 => PresenceState::InStudio,
            4 => PresenceState::Invisible,
            _ => PresenceState::Offline,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PresenceState::Offline => "avatar-offline",
            PresenceState::Online => "avatar-online",
            PresenceState::InGame => "avatar-inGame",
            PresenceState::InStudio => "avatar-studio",
            PresenceState::Invisible => "avatar-invisible",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PresenceState::Offline => "Offline",
            PresenceState::Online => "Online",
            PresenceState::InGame => "In Game",
            PresenceState::InStudio => "In Roblox Studio",
            PresenceState::Invisible => "Invisible / Offline",
        }
    }
}

/// `<proxy>/avatar/<id>?size=420x420&format=Png&isCircular=true`
pub fn avatar_url(proxy_base: &str, user_id: u64) -> String {
    format!(
        "{}/avatar/{}?size=420x420&format=Png&isCircular=true",
        proxy_base.trim_end_matches('/'),
        user_id
    )
}
