//! Modal gallery state machine: `Closed -> Open -> Closed`.
//!
//! The gallery owns two timers. Autoplay advances the carousel every
//! `autoplay_interval`; teardown releases the media some seconds after close.
//! Timer tasks never touch the gallery directly. They post a
//! [`GalleryEvent`] tagged with the session that scheduled it, and the UI
//! feeds events back through [`ModalGallery::handle`]. An event from an older
//! session is ignored, so a tick that races a close can never move the
//! viewport. Autoplay ticks also carry a generation that changes on every
//! restart or pause, so a tick already queued when the user navigates or
//! hovers is dropped too.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::carousel::Carousel;
use crate::config::WidgetConfig;
use crate::entity::{Entity, MediaItem};
use crate::timer::RestartableTimer;

pub const CONFIRM_TITLE: &str = "Start game";
pub const CONFIRM_TEXT: &str = "Do you want to start the game now?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    AutoAdvance { session: u64, generation: u64 },
    Teardown { session: u64 },
}

/// Side effects the host must carry out after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Open a URL in a new browser context.
    OpenExternal(String),
    /// Put the page scroll back where it was when the modal opened.
    RestoreScroll(f64),
}

/// Which dialog receives Escape and background clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    None,
    Modal,
    Confirm,
}

#[derive(Debug)]
struct OpenModal {
    entity: Entity,
    carousel: Carousel,
    hovered: bool,
    confirm: Option<String>,
}

#[derive(Debug)]
enum ModalState {
    Closed,
    Open(OpenModal),
}

pub struct ModalGallery {
    config: WidgetConfig,
    state: ModalState,
    /// Title and description survive close; media does not.
    last_entity: Option<Entity>,
    /// Media nodes still mounted (open, or closed but not yet torn down).
    mounted_media: Vec<MediaItem>,
    session: u64,
    autoplay_generation: u64,
    saved_scroll: Option<f64>,
    viewport_renders: u64,
    autoplay: RestartableTimer,
    teardown: RestartableTimer,
    events: UnboundedSender<GalleryEvent>,
}

impl ModalGallery {
    pub fn new(config: WidgetConfig) -> (Self, UnboundedReceiver<GalleryEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let gallery = Self {
            config,
            state: ModalState::Closed,
            last_entity: None,
            mounted_media: Vec::new(),
            session: 0,
            autoplay_generation: 0,
            saved_scroll: None,
            viewport_renders: 0,
            autoplay: RestartableTimer::new(),
            teardown: RestartableTimer::new(),
            events,
        };
        (gallery, rx)
    }

    /// Open the modal on `entity`. `scroll_y` is the page scroll to freeze.
    ///
    /// Opening while already open switches entity but keeps the scroll
    /// captured by the first open. Returns `false` and leaves everything as
    /// it was when the entity has no media.
    pub fn open(&mut self, entity: &Entity, scroll_y: f64) -> bool {
        let Some(carousel) = Carousel::new(entity.images.clone()) else {
            tracing::warn!(entity_id = %entity.id, "entity has no media, not opening gallery");
            return false;
        };
        self.teardown.cancel();
        self.stop_autoplay();

        if !self.is_open() {
            self.saved_scroll = Some(scroll_y);
        }
        self.session += 1;
        self.mounted_media = carousel.items().to_vec();
        self.last_entity = Some(entity.clone());
        self.state = ModalState::Open(OpenModal {
            entity: entity.clone(),
            carousel,
            hovered: false,
            confirm: None,
        });
        tracing::debug!(entity_id = %entity.id, session = self.session, "gallery opened");
        self.render();
        self.start_autoplay();
        true
    }

    /// Whether [`open`](Self::open) would show anything for `entity`.
    pub fn can_open(entity: &Entity) -> bool {
        !entity.images.is_empty()
    }

    /// Close the modal and any confirm dialog on top of it.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.is_open() {
            return Vec::new();
        }
        self.stop_autoplay();
        self.state = ModalState::Closed;
        self.schedule_teardown();
        tracing::debug!(session = self.session, "gallery closed");

        self.saved_scroll
            .take()
            .map(Effect::RestoreScroll)
            .into_iter()
            .collect()
    }

    pub fn next(&mut self) {
        if let ModalState::Open(open) = &mut self.state {
            open.carousel.next();
            self.after_manual_navigation();
        }
    }

    pub fn prev(&mut self) {
        if let ModalState::Open(open) = &mut self.state {
            open.carousel.prev();
            self.after_manual_navigation();
        }
    }

    /// Thumbnail click. Out-of-range targets clamp.
    pub fn go_to(&mut self, index: isize) {
        if let ModalState::Open(open) = &mut self.state {
            open.carousel.go_to(index);
            self.after_manual_navigation();
        }
    }

    pub fn pointer_enter(&mut self) {
        if let ModalState::Open(open) = &mut self.state {
            open.hovered = true;
            self.stop_autoplay();
        }
    }

    pub fn pointer_leave(&mut self) {
        if let ModalState::Open(open) = &mut self.state {
            open.hovered = false;
            self.start_autoplay();
        }
    }

    /// Ask before following the entity's link. Returns `false` when there is
    /// nothing to play.
    pub fn request_play(&mut self) -> bool {
        match &mut self.state {
            ModalState::Open(open) => match open.entity.link.clone() {
                Some(link) => {
                    open.confirm = Some(link);
                    true
                }
                None => false,
            },
            ModalState::Closed => false,
        }
    }

    /// Follow the entity's link without confirmation. The modal stays open.
    pub fn open_page(&self) -> Vec<Effect> {
        match &self.state {
            ModalState::Open(open) => open
                .entity
                .link
                .clone()
                .map(Effect::OpenExternal)
                .into_iter()
                .collect(),
            ModalState::Closed => Vec::new(),
        }
    }

    /// Confirm: open the link, then close both dialogs.
    pub fn confirm(&mut self) -> Vec<Effect> {
        let target = match &mut self.state {
            ModalState::Open(open) => open.confirm.take(),
            ModalState::Closed => None,
        };
        match target {
            Some(url) => {
                let mut effects = vec![Effect::OpenExternal(url)];
                effects.extend(self.close());
                effects
            }
            None => Vec::new(),
        }
    }

    pub fn cancel_confirm(&mut self) {
        if let ModalState::Open(open) = &mut self.state {
            open.confirm = None;
        }
    }

    /// Escape key or background click: close whichever dialog is on top.
    pub fn dismiss(&mut self) -> Vec<Effect> {
        match self.topmost() {
            Layer::Confirm => {
                self.cancel_confirm();
                Vec::new()
            }
            Layer::Modal => self.close(),
            Layer::None => Vec::new(),
        }
    }

    /// Apply a timer event. Stale sessions and autoplay generations are
    /// dropped.
    pub fn handle(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::AutoAdvance {
                session,
                generation,
            } if session == self.session && generation == self.autoplay_generation => {
                if let ModalState::Open(open) = &mut self.state {
                    if !open.hovered {
                        open.carousel.next();
                        self.render();
                    }
                }
            }
            GalleryEvent::Teardown { session } if session == self.session => {
                if !self.is_open() {
                    tracing::debug!(session, "releasing gallery media");
                    self.mounted_media.clear();
                }
            }
            _ => tracing::trace!(?event, current = self.session, "stale gallery event"),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn topmost(&self) -> Layer {
        match &self.state {
            ModalState::Open(open) if open.confirm.is_some() => Layer::Confirm,
            ModalState::Open(_) => Layer::Modal,
            ModalState::Closed => Layer::None,
        }
    }

    /// Entity shown in the modal, kept after close for the fade-out.
    pub fn entity(&self) -> Option<&Entity> {
        match &self.state {
            ModalState::Open(open) => Some(&open.entity),
            ModalState::Closed => self.last_entity.as_ref(),
        }
    }

    pub fn index(&self) -> Option<usize> {
        match &self.state {
            ModalState::Open(open) => Some(open.carousel.index()),
            ModalState::Closed => None,
        }
    }

    pub fn current_media(&self) -> Option<&MediaItem> {
        match &self.state {
            ModalState::Open(open) => Some(open.carousel.current()),
            ModalState::Closed => None,
        }
    }

    /// Thumbnail strip, one per gallery item. Empty once torn down.
    pub fn thumbnails(&self) -> &[MediaItem] {
        &self.mounted_media
    }

    pub fn counter(&self) -> Option<String> {
        match &self.state {
            ModalState::Open(open) => Some(open.carousel.counter()),
            ModalState::Closed => None,
        }
    }

    pub fn confirm_target(&self) -> Option<&str> {
        match &self.state {
            ModalState::Open(open) => open.confirm.as_deref(),
            ModalState::Closed => None,
        }
    }

    pub fn is_hovered(&self) -> bool {
        matches!(&self.state, ModalState::Open(open) if open.hovered)
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn teardown_pending(&self) -> bool {
        self.teardown.is_running()
    }

    pub fn media_mounted(&self) -> bool {
        !self.mounted_media.is_empty()
    }

    /// Closed, but the media has not been torn down yet.
    pub fn is_closing(&self) -> bool {
        !self.is_open() && self.media_mounted()
    }

    /// Number of viewport updates so far. The UI re-renders when it changes.
    pub fn viewport_renders(&self) -> u64 {
        self.viewport_renders
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    fn render(&mut self) {
        self.viewport_renders += 1;
    }

    fn after_manual_navigation(&mut self) {
        self.render();
        if !self.is_hovered() {
            self.start_autoplay();
        }
    }

    fn start_autoplay(&mut self) {
        self.autoplay_generation += 1;
        let session = self.session;
        let generation = self.autoplay_generation;
        let tx = self.events.clone();
        self.autoplay
            .start_repeating(self.config.autoplay_interval, move || {
                tx.send(GalleryEvent::AutoAdvance {
                    session,
                    generation,
                })
                .is_ok()
            });
    }

    fn stop_autoplay(&mut self) {
        self.autoplay_generation += 1;
        self.autoplay.cancel();
    }

    fn schedule_teardown(&mut self) {
        let session = self.session;
        let tx = self.events.clone();
        self.teardown.start_once(self.config.teardown_delay, move || {
            let _ = tx.send(GalleryEvent::Teardown { session });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use std::time::Duration;

    fn entity_with(images: &[&str]) -> Entity {
        Entity::new("g1", EntityKind::Game, "Game", images[0])
            .with_images(images.iter().copied())
            .with_link("https://www.roblox.com/games/1")
    }

    fn drain(gallery: &mut ModalGallery, rx: &mut UnboundedReceiver<GalleryEvent>) {
        while let Ok(event) = rx.try_recv() {
            gallery.handle(event);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn open_starts_at_first_image() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png", "b.png", "c.png"]), 120.0);

        assert!(gallery.is_open());
        assert_eq!(gallery.index(), Some(0));
        assert_eq!(gallery.thumbnails().len(), 3);
        assert_eq!(gallery.counter().as_deref(), Some("1 / 3"));
        assert!(gallery.autoplay_running());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_next_sequence_wraps() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png", "b.png", "c.png"]), 0.0);

        let mut seen = Vec::new();
        for _ in 0..3 {
            gallery.next();
            seen.extend(gallery.index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn close_returns_saved_scroll() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png"]), 640.5);
        assert_eq!(gallery.close(), vec![Effect::RestoreScroll(640.5)]);
        assert!(gallery.close().is_empty());
        assert!(!gallery.autoplay_running());
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_advances_after_interval() {
        let (mut gallery, mut rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png", "b.png"]), 0.0);

        tokio::time::sleep(Duration::from_millis(6_100)).await;
        drain(&mut gallery, &mut rx);
        assert_eq!(gallery.index(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn hover_pauses_autoplay() {
        let (mut gallery, mut rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png", "b.png"]), 0.0);
        gallery.pointer_enter();

        tokio::time::sleep(Duration::from_secs(20)).await;
        drain(&mut gallery, &mut rx);
        assert_eq!(gallery.index(), Some(0));

        gallery.pointer_leave();
        tokio::time::sleep(Duration::from_millis(6_100)).await;
        drain(&mut gallery, &mut rx);
        assert_eq!(gallery.index(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_opens_link_and_closes_everything() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png"]), 10.0);

        assert!(gallery.request_play());
        assert_eq!(gallery.topmost(), Layer::Confirm);

        let effects = gallery.confirm();
        assert_eq!(
            effects,
            vec![
                Effect::OpenExternal("https://www.roblox.com/games/1".into()),
                Effect::RestoreScroll(10.0),
            ]
        );
        assert!(!gallery.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_closes_topmost_only() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png"]), 0.0);
        gallery.request_play();

        assert!(gallery.dismiss().is_empty());
        assert_eq!(gallery.topmost(), Layer::Modal);
        assert!(gallery.is_open());

        gallery.dismiss();
        assert_eq!(gallery.topmost(), Layer::None);
    }

    #[tokio::test(start_paused = true)]
    async fn page_link_keeps_modal_open() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png"]), 0.0);
        assert_eq!(
            gallery.open_page(),
            vec![Effect::OpenExternal("https://www.roblox.com/games/1".into())]
        );
        assert!(gallery.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_entity_leaves_current_modal_alone() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png", "b.png"]), 50.0);
        let session = gallery.session();

        let mut bare = entity_with(&["x.png"]);
        bare.images.clear();
        assert!(!ModalGallery::can_open(&bare));
        assert!(!gallery.open(&bare, 999.0));

        assert!(gallery.is_open());
        assert!(gallery.autoplay_running());
        assert_eq!(gallery.session(), session);
        assert_eq!(gallery.entity().map(|e| e.id.as_str()), Some("g1"));
        assert_eq!(gallery.close(), vec![Effect::RestoreScroll(50.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_entity_does_not_cancel_teardown() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        gallery.open(&entity_with(&["a.png"]), 0.0);
        gallery.close();

        let mut bare = entity_with(&["x.png"]);
        bare.images.clear();
        assert!(!gallery.open(&bare, 0.0));
        assert!(gallery.teardown_pending());
        assert!(gallery.is_closing());
    }

    #[tokio::test(start_paused = true)]
    async fn play_without_link_does_nothing() {
        let (mut gallery, _rx) = ModalGallery::new(WidgetConfig::default());
        let entity = Entity::new("p", EntityKind::Project, "Project", "p.png");
        gallery.open(&entity, 0.0);
        assert!(!gallery.request_play());
        assert_eq!(gallery.topmost(), Layer::Modal);
    }
}
