use dioxus::prelude::*;
use portfolio_core::AppContext;

use crate::components::profile::use_presence_provider;
use crate::pages::{About, Games, Projects, Store};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - About section
/// - `/games` - Roblox games
/// - `/projects` - static projects followed by channel videos
/// - `/store` - products with checkout links
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    About {},
    #[route("/games")]
    Games {},
    #[route("/projects")]
    Projects {},
    #[route("/store")]
    Store {},
}

/// Root application component.
///
/// Provides global styles, the saved preferences, the presence feed and
/// routing. The [`AppContext`] itself comes from the launch builder.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let preferences = use_signal(|| ctx.preferences.clone());
    use_context_provider(|| preferences);
    use_presence_provider();

    let prefs = preferences();
    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app theme-{prefs.theme.as_str()}",
            lang: prefs.language.code(),
            dir: prefs.language.dir(),
            Router::<Route> {}
        }
    }
}
