//! Tunable widget constants.
//!
//! Earlier drafts of the site disagreed on these numbers; they live here so
//! every widget reads the same values and tests can shrink them.

use std::time::Duration;

/// Number of cards shown before the "show more" toggle.
pub const DEFAULT_VISIBLE_CARDS: usize = 2;

/// Carousel auto-advance period.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6000);

/// Delay between closing the modal and releasing its media.
pub const DEFAULT_TEARDOWN_DELAY: Duration = Duration::from_secs(5);

/// Presence re-poll period.
pub const DEFAULT_PRESENCE_INTERVAL: Duration = Duration::from_secs(60);

/// Deadline for a single presence request.
pub const DEFAULT_PRESENCE_TIMEOUT: Duration = Duration::from_secs(7);

/// Deadline for fetching entity metadata before falling back.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(7);

/// Characters of description shown on a card.
pub const DEFAULT_PREVIEW_CHARS: usize = 80;

/// Widget configuration shared by the grid, gallery and presence poller.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub visible_cards: usize,
    pub autoplay_interval: Duration,
    pub teardown_delay: Duration,
    pub presence_interval: Duration,
    pub presence_timeout: Duration,
    pub fetch_timeout: Duration,
    pub preview_chars: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            visible_cards: DEFAULT_VISIBLE_CARDS,
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            teardown_delay: DEFAULT_TEARDOWN_DELAY,
            presence_interval: DEFAULT_PRESENCE_INTERVAL,
            presence_timeout: DEFAULT_PRESENCE_TIMEOUT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}
