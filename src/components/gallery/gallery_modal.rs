//! Gallery Modal Component
//!
//! Overlay with title, description and an autoplaying carousel. All state
//! lives in [`ModalGallery`]; this component only renders it and forwards
//! input. After close the media stays mounted in a hidden overlay until the
//! gallery tears it down.

use dioxus::prelude::*;
use portfolio_core::gallery::{CONFIRM_TEXT, CONFIRM_TITLE};
use portfolio_core::{Entity, EntityKind, MediaItem, ModalGallery};

use super::ConfirmDialog;
use crate::effects;

/// Modal gallery overlay.
///
/// # Example
///
/// ```rust
/// rsx! {
///     GalleryModal { gallery }
/// }
/// ```
#[component]
pub fn GalleryModal(gallery: Signal<ModalGallery>) -> Element {
    let view = gallery.read();
    let Some(entity) = view.entity().cloned() else {
        return rsx! {};
    };
    if view.is_closing() {
        let thumbnails: Vec<String> = view.thumbnails().iter().map(MediaItem::thumbnail).collect();
        drop(view);
        return rsx! {
            ClosingGallery { entity, thumbnails }
        };
    }
    if !view.is_open() {
        return rsx! {};
    }

    let index = view.index().unwrap_or_default();
    let counter = view.counter().unwrap_or_default();
    let thumbnails: Vec<String> = view.thumbnails().iter().map(MediaItem::thumbnail).collect();
    let media = view.current_media().cloned();
    let confirming = view.confirm_target().is_some();
    drop(view);

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            effects::apply(gallery.write().dismiss());
        }
    };

    rsx! {
        div {
            class: "gallery-root",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,

            div {
                class: "modal-overlay",
                onclick: move |_| effects::apply(gallery.write().dismiss()),

                div {
                    class: "gallery-modal",
                    role: "dialog",
                    "aria-modal": "true",
                    onclick: move |e| e.stop_propagation(),

                    header { class: "gallery-modal__header",
                        if let Some(icon) = &entity.icon_url {
                            img { class: "gallery-modal__icon", src: "{icon}", alt: "" }
                        }
                        h2 { class: "modal-title", "{entity.name}" }
                        button {
                            class: "gallery-modal__close",
                            "aria-label": "Close",
                            onclick: move |_| effects::apply(gallery.write().close()),
                            "\u{00d7}"
                        }
                    }

                    div {
                        class: "carousel",
                        onmouseenter: move |_| gallery.write().pointer_enter(),
                        onmouseleave: move |_| gallery.write().pointer_leave(),

                        button {
                            class: "carousel__nav carousel__nav--prev",
                            "aria-label": "Previous",
                            onclick: move |_| gallery.write().prev(),
                            "\u{2039}"
                        }

                        div { class: "carousel__viewport",
                            if let Some(item) = media {
                                MediaView { key: "{index}", item }
                            }
                        }

                        button {
                            class: "carousel__nav carousel__nav--next",
                            "aria-label": "Next",
                            onclick: move |_| gallery.write().next(),
                            "\u{203a}"
                        }

                        span { class: "carousel__counter", "{counter}" }
                    }

                    div { class: "carousel__thumbs",
                        for (i, thumb) in thumbnails.into_iter().enumerate() {
                            button {
                                key: "{i}",
                                class: if i == index { "carousel__thumb active" } else { "carousel__thumb" },
                                onclick: move |_| gallery.write().go_to(i as isize),
                                img { src: "{thumb}", alt: "", "loading": "lazy" }
                            }
                        }
                    }

                    if !entity.description.is_empty() {
                        p { class: "modal-description", "{entity.description}" }
                    }

                    if entity.link.is_some() {
                        div { class: "modal-actions",
                            if entity.kind == EntityKind::Game {
                                button {
                                    class: "btn-primary",
                                    onclick: move |_| {
                                        gallery.write().request_play();
                                    },
                                    "Play"
                                }
                            }
                            button {
                                class: "btn-secondary",
                                onclick: move |_| effects::apply(gallery.read().open_page()),
                                "Page"
                            }
                        }
                    }
                }
            }

            if confirming {
                ConfirmDialog {
                    title: CONFIRM_TITLE,
                    text: CONFIRM_TEXT,
                    on_confirm: move |_| effects::apply(gallery.write().confirm()),
                    on_cancel: move |_| gallery.write().cancel_confirm(),
                }
            }
        }
    }
}

/// What stays mounted between close and teardown: hidden, inert and fading.
#[component]
fn ClosingGallery(entity: Entity, thumbnails: Vec<String>) -> Element {
    rsx! {
        div {
            class: "gallery-root gallery-root--closing",
            "aria-hidden": "true",
            "inert": "true",

            div { class: "modal-overlay",
                div { class: "gallery-modal",
                    header { class: "gallery-modal__header",
                        h2 { class: "modal-title", "{entity.name}" }
                    }
                    div { class: "carousel__thumbs",
                        for (i, thumb) in thumbnails.into_iter().enumerate() {
                            span {
                                key: "{i}",
                                class: "carousel__thumb",
                                img { src: "{thumb}", alt: "" }
                            }
                        }
                    }
                    if !entity.description.is_empty() {
                        p { class: "modal-description", "{entity.description}" }
                    }
                }
            }
        }
    }
}

/// The single viewport element for the current slide.
#[component]
fn MediaView(item: MediaItem) -> Element {
    let src = item.src();
    match item {
        MediaItem::Image(_) => rsx! {
            img { class: "carousel__media", src: "{src}", alt: "" }
        },
        MediaItem::Video(_) => rsx! {
            video {
                class: "carousel__media",
                src: "{src}",
                controls: true,
                autoplay: true,
                muted: true,
                "playsinline": "true",
            }
        },
        MediaItem::YouTube(_) => rsx! {
            iframe {
                class: "carousel__media",
                src: "{src}",
                allow: "autoplay; encrypted-media; picture-in-picture",
                "allowfullscreen": "true",
            }
        },
    }
}
