//! Carousel index arithmetic.
//!
//! Invariant: `0 <= index < len`. `next`/`prev` wrap in both directions;
//! `go_to` clamps.

use crate::entity::MediaItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    items: Vec<MediaItem>,
    index: usize,
}

impl Carousel {
    /// Returns `None` for an empty gallery.
    pub fn new(items: Vec<MediaItem>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items, index: 0 })
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn current(&self) -> &MediaItem {
        &self.items[self.index]
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.items.len();
        self.index
    }

    pub fn prev(&mut self) -> usize {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
        self.index
    }

    /// Jump to `target`, clamped to `[0, len - 1]`.
    pub fn go_to(&mut self, target: isize) -> usize {
        let last = self.items.len() as isize - 1;
        self.index = target.clamp(0, last) as usize;
        self.index
    }

    /// "3 / 5" style counter, 1-based.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        Carousel::new(
            (0..n)
                .map(|i| MediaItem::Image(format!("img/{}.webp", i)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_gallery_rejected() {
        assert!(Carousel::new(Vec::new()).is_none());
    }

    #[test]
    fn next_wraps_through_three_images() {
        let mut c = carousel(3);
        let seq: Vec<usize> = (0..3).map(|_| c.next()).collect();
        assert_eq!(seq, vec![1, 2, 0]);
    }

    #[test]
    fn prev_wraps_backwards() {
        let mut c = carousel(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.prev(), 1);
    }

    #[test]
    fn go_to_clamps() {
        let mut c = carousel(4);
        assert_eq!(c.go_to(-3), 0);
        assert_eq!(c.go_to(10), 3);
        assert_eq!(c.go_to(2), 2);
    }

    #[test]
    fn single_image_stays_put() {
        let mut c = carousel(1);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert_eq!(c.counter(), "1 / 1");
    }
}
