//! Showcase Component
//!
//! A titled card grid with its own modal gallery.

use dioxus::prelude::*;
use portfolio_core::{CardGrid, Effect, Entity, GalleryEvent, ModalGallery};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::components::cards::CardGridView;
use crate::components::gallery::GalleryModal;
use crate::context::use_app_context;
use crate::effects;

/// Grid section whose cards open a gallery.
///
/// The gallery's timer events arrive on a channel that this component
/// drains for as long as it is mounted; unmounting drops the gallery and
/// with it every pending timer.
#[component]
pub fn Showcase(title: String, grid: Signal<CardGrid>) -> Element {
    let ctx = use_app_context();
    let preview_chars = ctx.config.preview_chars;

    let (mut gallery, mut events) = use_hook(|| {
        let (gallery, events) = ModalGallery::new(ctx.config.clone());
        (
            Signal::new(gallery),
            Signal::new(Some::<UnboundedReceiver<GalleryEvent>>(events)),
        )
    });

    use_future(move || async move {
        let Some(mut rx) = events.write().take() else {
            return;
        };
        while let Some(event) = rx.recv().await {
            gallery.write().handle(event);
        }
    });

    let open_entity = move |entity: Entity| {
        if !ModalGallery::can_open(&entity) {
            tracing::debug!(entity_id = %entity.id, "nothing to show, page stays scrollable");
            return;
        }
        spawn(async move {
            let scroll_y = effects::freeze_scroll().await;
            if gallery.write().open(&entity, scroll_y) {
                effects::focus_gallery();
            }
        });
    };

    rsx! {
        section { class: "showcase",
            h2 { class: "section-header", "{title}" }

            CardGridView {
                grid,
                preview_chars,
                on_open: open_entity,
                on_buy: move |link: String| effects::apply(vec![Effect::OpenExternal(link)]),
            }

            GalleryModal { gallery }
        }
    }
}
