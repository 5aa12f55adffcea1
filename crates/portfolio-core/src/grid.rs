//! Card grid with a "show more" toggle.
//!
//! The first `visible_count` entities go to the primary container, the rest to
//! an overflow container that starts hidden. A single toggle flips the overflow
//! and swaps its glyph. The async variant starts in [`LoadState::Loading`] with
//! the toggle disabled until the entities arrive (or the fetch gives up and the
//! fallback list is used).

use std::future::Future;
use std::time::Duration;

use crate::entity::{Entity, EntityList};
use crate::error::{PortfolioError, PortfolioResult};

pub const EXPAND_GLYPH: &str = "+";
pub const COLLAPSE_GLYPH: &str = "\u{2212}";
pub const LOADING_GLYPH: &str = "\u{2026}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardGrid {
    entities: Vec<Entity>,
    visible_count: usize,
    expanded: bool,
    state: LoadState,
}

impl CardGrid {
    /// Grid over an already-known list.
    pub fn new(entities: EntityList, visible_count: usize) -> Self {
        Self {
            entities: entities.into_vec(),
            visible_count,
            expanded: false,
            state: LoadState::Ready,
        }
    }

    /// Empty grid waiting for a fetch.
    pub fn loading(visible_count: usize) -> Self {
        Self {
            entities: Vec::new(),
            visible_count,
            expanded: false,
            state: LoadState::Loading,
        }
    }

    /// Install the fetched list. Keeps the overflow collapsed.
    pub fn finish_loading(&mut self, entities: EntityList) {
        self.entities = entities.into_vec();
        self.expanded = false;
        self.state = LoadState::Ready;
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    fn split_point(&self) -> usize {
        self.visible_count.min(self.entities.len())
    }

    pub fn primary(&self) -> &[Entity] {
        &self.entities[..self.split_point()]
    }

    pub fn overflow(&self) -> &[Entity] {
        &self.entities[self.split_point()..]
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn find(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Whether the overflow container is currently shown.
    pub fn overflow_visible(&self) -> bool {
        self.expanded && !self.overflow().is_empty()
    }

    /// The toggle exists while loading (disabled) and whenever there is overflow.
    pub fn toggle_present(&self) -> bool {
        self.is_loading() || !self.overflow().is_empty()
    }

    pub fn toggle_enabled(&self) -> bool {
        !self.is_loading() && !self.overflow().is_empty()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_GLYPH
        } else if self.expanded {
            COLLAPSE_GLYPH
        } else {
            EXPAND_GLYPH
        }
    }

    /// Flip the overflow container. Returns the new visibility; a disabled
    /// toggle is a no-op.
    pub fn toggle(&mut self) -> bool {
        if self.toggle_enabled() {
            self.expanded = !self.expanded;
        }
        self.overflow_visible()
    }
}

/// Run `fetch` with a deadline. A timeout is reported like any other failure.
pub async fn fetch_with_timeout<F, T>(fetch: F, timeout: Duration) -> PortfolioResult<T>
where
    F: Future<Output = PortfolioResult<T>>,
{
    match tokio::time::timeout(timeout, fetch).await {
        Ok(result) => result,
        Err(_) => Err(PortfolioError::Timeout(timeout.as_millis() as u64)),
    }
}

/// Resolve the entities for an async grid. On error or timeout, `fallback`
/// builds the list instead; the error is only logged.
pub async fn load_entities<F, B>(fetch: F, timeout: Duration, fallback: B) -> EntityList
where
    F: Future<Output = PortfolioResult<EntityList>>,
    B: FnOnce() -> EntityList,
{
    match fetch_with_timeout(fetch, timeout).await {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(error = %e, "entity fetch failed, using fallback records");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;

    fn list(n: usize) -> EntityList {
        EntityList::new(
            (1..=n)
                .map(|i| Entity::new(i.to_string(), EntityKind::Game, format!("G{}", i), "c.png"))
                .collect(),
        )
        .unwrap()
    }

    fn ids(entities: &[Entity]) -> Vec<&str> {
        entities.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn splits_three_entities_at_two() {
        let grid = CardGrid::new(list(3), 2);
        assert_eq!(ids(grid.primary()), vec!["1", "2"]);
        assert_eq!(ids(grid.overflow()), vec!["3"]);
        assert!(!grid.overflow_visible());
        assert_eq!(grid.toggle_label(), EXPAND_GLYPH);
    }

    #[test]
    fn toggling_twice_restores_initial_state() {
        let mut grid = CardGrid::new(list(3), 2);
        let initial = grid.clone();

        assert!(grid.toggle());
        assert_eq!(grid.toggle_label(), COLLAPSE_GLYPH);
        assert!(!grid.toggle());

        assert_eq!(grid, initial);
        assert_eq!(grid.toggle_label(), EXPAND_GLYPH);
    }

    #[test]
    fn empty_list_hides_toggle() {
        let mut grid = CardGrid::new(EntityList::default(), 2);
        assert!(grid.primary().is_empty());
        assert!(grid.overflow().is_empty());
        assert!(!grid.toggle_present());
        assert!(!grid.toggle());
    }

    #[test]
    fn short_list_has_no_overflow() {
        let grid = CardGrid::new(list(2), 2);
        assert_eq!(grid.primary().len(), 2);
        assert!(!grid.toggle_present());
    }

    #[test]
    fn loading_grid_disables_toggle() {
        let mut grid = CardGrid::loading(2);
        assert!(grid.toggle_present());
        assert!(!grid.toggle_enabled());
        assert_eq!(grid.toggle_label(), LOADING_GLYPH);
        assert!(!grid.toggle());

        grid.finish_loading(list(4));
        assert!(grid.toggle_enabled());
        assert_eq!(grid.overflow().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_fetch_times_out_to_fallback() {
        let fetch = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(list(5))
        };
        let resolved = load_entities(fetch, Duration::from_secs(7), || list(1)).await;
        assert_eq!(resolved.len(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_uses_fallback() {
        let fetch = async { Err(PortfolioError::Network("refused".into())) };
        let resolved = load_entities(fetch, Duration::from_secs(7), || list(2)).await;
        assert_eq!(resolved.len(), 2);
    }
}
