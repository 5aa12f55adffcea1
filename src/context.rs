//! Context hooks for the portfolio UI.
//!
//! [`AppContext`] is built once in `main` and handed to the launch builder;
//! preferences live in a signal provided by `App`.
//!
//! ```ignore
//! let ctx = use_app_context();
//! let mut prefs = use_preferences();
//! update_preferences(&ctx, &mut prefs, |p| p.theme = p.theme.toggled());
//! ```

use dioxus::prelude::*;
use portfolio_core::{AppContext, Preferences};

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_preferences() -> Signal<Preferences> {
    use_context::<Signal<Preferences>>()
}

/// Apply `change` to the preferences signal and write the result to disk.
///
/// A failed save is logged; the in-memory change still applies.
pub fn update_preferences(
    ctx: &AppContext,
    preferences: &mut Signal<Preferences>,
    change: impl FnOnce(&mut Preferences),
) {
    let mut next = preferences();
    change(&mut next);
    if let Err(e) = ctx.save_preferences(&next) {
        tracing::warn!(error = %e, "failed to save preferences");
    }
    preferences.set(next);
}
