//! Projects page - static projects followed by the channel's latest videos.

use dioxus::prelude::*;
use portfolio_core::context::PROJECT_VIDEOS;
use portfolio_core::grid::load_entities;
use portfolio_core::{catalog, CardGrid};

use crate::components::{NavHeader, NavLocation, Showcase};
use crate::context::use_app_context;

#[component]
pub fn Projects() -> Element {
    let ctx = use_app_context();
    let mut grid = use_signal(|| CardGrid::loading(ctx.config.visible_cards));

    use_effect(move || {
        let ctx = ctx.clone();
        spawn(async move {
            let fetch = async { ctx.fetch_videos(PROJECT_VIDEOS).await.map(|v| catalog::projects(&v)) };
            let entities = load_entities(fetch, ctx.config.fetch_timeout, || catalog::projects(&[])).await;
            tracing::info!(count = entities.len(), "projects loaded");
            grid.write().finish_loading(entities);
        });
    });

    rsx! {
        NavHeader { current: NavLocation::Projects }

        main { class: "page",
            Showcase { title: "Projects", grid }
        }
    }
}
