//! Entity Card Component
//!
//! One game, project or product in a grid.

use dioxus::prelude::*;
use portfolio_core::catalog::purchase_label;
use portfolio_core::{Entity, EntityKind};

/// Card with cover, optional icon, name and a short description preview.
///
/// Clicking anywhere on the card opens the gallery. Products also get a
/// purchase button that goes straight to checkout.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     EntityCard {
///         entity: game.clone(),
///         preview_chars: 80,
///         on_open: move |entity| gallery.write().open(&entity, 0.0),
///         on_buy: move |link| effects::apply(vec![Effect::OpenExternal(link)]),
///     }
/// }
/// ```
#[component]
pub fn EntityCard(
    entity: Entity,
    preview_chars: usize,
    on_open: EventHandler<Entity>,
    /// Checkout handler, called with the product link
    on_buy: EventHandler<String>,
) -> Element {
    let preview = entity.preview(preview_chars);
    let purchase = (entity.kind == EntityKind::Product)
        .then(|| entity.link.clone().map(|link| (purchase_label(&entity, "Buy", "for"), link)))
        .flatten();

    let card_entity = entity.clone();

    rsx! {
        div {
            class: "entity-card entity-card--{kind_class(entity.kind)}",
            onclick: move |_| on_open.call(card_entity.clone()),

            div { class: "entity-card__cover",
                img {
                    src: "{entity.cover_url}",
                    alt: "{entity.name}",
                    "loading": "lazy",
                }
            }

            div { class: "entity-card__body",
                div { class: "entity-card__title",
                    if let Some(icon) = &entity.icon_url {
                        img { class: "entity-card__icon", src: "{icon}", alt: "" }
                    }
                    h3 { "{entity.name}" }
                }

                if let Some(text) = preview {
                    p { class: "entity-card__preview", "{text}" }
                }

                if let Some((label, link)) = purchase {
                    button {
                        class: "btn-primary entity-card__buy",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_buy.call(link.clone());
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}

fn kind_class(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Game => "game",
        EntityKind::Project => "project",
        EntityKind::Product => "product",
        EntityKind::Video => "video",
    }
}
