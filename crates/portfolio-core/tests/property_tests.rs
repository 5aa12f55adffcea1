//! Property-based tests for the card grid and carousel
//!
//! Uses proptest to check the split and index invariants for arbitrary sizes.

use proptest::prelude::*;
use portfolio_core::{CardGrid, Carousel, Entity, EntityKind, EntityList, MediaItem};

// ============================================================================
// Strategy Generators
// ============================================================================

fn entity_list(len: usize) -> EntityList {
    EntityList::new(
        (0..len)
            .map(|i| Entity::new(format!("e{}", i), EntityKind::Project, format!("Card {}", i), "c.webp"))
            .collect(),
    )
    .expect("distinct ids")
}

fn media(len: usize) -> Vec<MediaItem> {
    (0..len).map(|i| MediaItem::Image(format!("img/{}.webp", i))).collect()
}

/// Carousel actions a user can take
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Prev,
    GoTo(isize),
}

fn nav_ops() -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(NavOp::Next),
            2 => Just(NavOp::Prev),
            1 => (-20isize..40).prop_map(NavOp::GoTo),
        ],
        0..60,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Primary holds min(L, 2) cards, overflow the rest, order preserved
    #[test]
    fn grid_split_at_default_count(len in 0usize..40) {
        let grid = CardGrid::new(entity_list(len), 2);
        prop_assert_eq!(grid.primary().len(), len.min(2));
        prop_assert_eq!(grid.overflow().len(), len - len.min(2));

        let ids: Vec<_> = grid.primary().iter().chain(grid.overflow()).map(|e| e.id.clone()).collect();
        let expected: Vec<_> = (0..len).map(|i| format!("e{}", i)).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Toggling an even number of times restores the initial state
    #[test]
    fn grid_double_toggle_is_identity(len in 0usize..10, visible in 0usize..5, flips in 0usize..4) {
        let mut grid = CardGrid::new(entity_list(len), visible);
        let initial = grid.clone();
        for _ in 0..flips * 2 {
            grid.toggle();
        }
        prop_assert_eq!(grid, initial);
    }

    /// The index stays in range whatever the user does
    #[test]
    fn carousel_index_in_range(len in 1usize..12, ops in nav_ops()) {
        let mut carousel = Carousel::new(media(len)).expect("non-empty");
        for op in ops {
            let index = match op {
                NavOp::Next => carousel.next(),
                NavOp::Prev => carousel.prev(),
                NavOp::GoTo(i) => carousel.go_to(i),
            };
            prop_assert!(index < len);
            prop_assert_eq!(index, carousel.index());
        }
    }

    /// `next()` called len times returns to the start
    #[test]
    fn carousel_next_round_trip(len in 1usize..12, start in 0isize..12) {
        let mut carousel = Carousel::new(media(len)).expect("non-empty");
        let origin = carousel.go_to(start);
        for _ in 0..len {
            carousel.next();
        }
        prop_assert_eq!(carousel.index(), origin);
    }

    /// Out-of-range targets clamp to the nearest end
    #[test]
    fn carousel_go_to_clamps(len in 1usize..12, target in -50isize..50) {
        let mut carousel = Carousel::new(media(len)).expect("non-empty");
        let index = carousel.go_to(target);
        if target < 0 {
            prop_assert_eq!(index, 0);
        } else if target as usize >= len {
            prop_assert_eq!(index, len - 1);
        } else {
            prop_assert_eq!(index, target as usize);
        }
    }
}
