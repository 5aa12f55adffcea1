//! Developer profile widgets.

mod presence_badge;

pub use presence_badge::{use_presence_provider, PresenceBadge};
