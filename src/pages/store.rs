//! Store page - products resolved against the channel's video metadata.

use dioxus::prelude::*;
use portfolio_core::grid::load_entities;
use portfolio_core::{catalog, CardGrid};

use crate::components::{NavHeader, NavLocation, Showcase};
use crate::context::use_app_context;

/// Upper bound the proxy accepts for `maxResults`.
const METADATA_VIDEOS: u32 = 50;

#[component]
pub fn Store() -> Element {
    let ctx = use_app_context();
    let mut grid = use_signal(|| CardGrid::loading(ctx.config.visible_cards));

    use_effect(move || {
        let ctx = ctx.clone();
        spawn(async move {
            let fetch = async {
                ctx.fetch_videos(METADATA_VIDEOS)
                    .await
                    .map(|videos| catalog::resolve_products(catalog::PRODUCTS, &videos))
            };
            let entities =
                load_entities(fetch, ctx.config.fetch_timeout, catalog::fallback_products).await;
            grid.write().finish_loading(entities);
        });
    });

    rsx! {
        NavHeader { current: NavLocation::Store }

        main { class: "page",
            Showcase { title: "Store", grid }
        }
    }
}
