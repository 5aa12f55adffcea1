//! Games page - the static game catalog.

use dioxus::prelude::*;
use portfolio_core::{catalog, CardGrid};

use crate::components::{NavHeader, NavLocation, Showcase};
use crate::context::use_app_context;

#[component]
pub fn Games() -> Element {
    let ctx = use_app_context();
    let grid = use_signal(|| CardGrid::new(catalog::games(), ctx.config.visible_cards));

    rsx! {
        NavHeader { current: NavLocation::Games }

        main { class: "page",
            Showcase { title: "Games", grid }
        }
    }
}
