//! Card Grid Component
//!
//! Primary cards, the hidden overflow row and the "show more" toggle.

use dioxus::prelude::*;
use portfolio_core::{CardGrid, Entity};

use super::EntityCard;

#[component]
pub fn CardGridView(
    grid: Signal<CardGrid>,
    preview_chars: usize,
    on_open: EventHandler<Entity>,
    on_buy: EventHandler<String>,
) -> Element {
    let view = grid.read();
    let overflow_class = if view.overflow_visible() {
        "card-grid card-grid--overflow"
    } else {
        "card-grid card-grid--overflow hidden"
    };

    rsx! {
        div { class: "card-grid",
            for entity in view.primary().iter().cloned() {
                EntityCard {
                    key: "{entity.id}",
                    entity,
                    preview_chars,
                    on_open,
                    on_buy,
                }
            }
        }

        if !view.overflow().is_empty() {
            div { class: overflow_class,
                for entity in view.overflow().iter().cloned() {
                    EntityCard {
                        key: "{entity.id}",
                        entity,
                        preview_chars,
                        on_open,
                        on_buy,
                    }
                }
            }
        }

        if view.toggle_present() {
            button {
                class: if view.is_loading() { "grid-toggle loading" } else { "grid-toggle" },
                disabled: !view.toggle_enabled(),
                "aria-expanded": "{view.overflow_visible()}",
                onclick: move |_| {
                    grid.write().toggle();
                },
                "{view.toggle_label()}"
            }
        }
    }
}
