//! Portfolio Core Library
//!
//! Headless state and domain logic for the portfolio site.
//!
//! ## Overview
//!
//! The site shows a developer's Roblox games, projects and store products as
//! card grids. Clicking a card opens a modal gallery with an autoplaying
//! carousel. An avatar badge follows the developer's Roblox presence.
//!
//! Everything here is UI-agnostic: the desktop front end renders these types
//! and forwards user input back into them.
//!
//! - [`grid::CardGrid`]: visible / overflow split with a "show more" toggle
//! - [`gallery::ModalGallery`]: `Closed -> Open -> Closed` with autoplay, confirm
//!   dialog, scroll freeze and delayed media teardown
//! - [`presence::PresencePoller`]: interval + visibility polling with an
//!   endpoint fallback chain
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{catalog, gallery::ModalGallery, grid::CardGrid, WidgetConfig};
//!
//! let config = WidgetConfig::default();
//! let mut grid = CardGrid::new(catalog::games(), config.visible_cards);
//! grid.toggle();
//!
//! let (mut gallery, mut events) = ModalGallery::new(config);
//! gallery.open(&grid.entities()[0], 0.0);
//! while let Some(event) = events.recv().await {
//!     gallery.handle(event);
//! }
//! ```

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod context;
pub mod entity;
pub mod error;
pub mod gallery;
pub mod grid;
pub mod logging;
pub mod prefs;
pub mod presence;
pub mod timer;
pub mod video;

// Re-exports
pub use carousel::Carousel;
pub use config::WidgetConfig;
pub use context::AppContext;
pub use entity::{Entity, EntityKind, EntityList, MediaItem};
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::{Effect, GalleryEvent, Layer, ModalGallery};
pub use grid::{CardGrid, LoadState};
pub use prefs::{Language, Preferences, Theme};
pub use presence::{PresencePoller, PresenceSource, PresenceState, PresenceStatus};
pub use timer::RestartableTimer;
pub use video::{VideoItem, VideoList, VideoSource};
