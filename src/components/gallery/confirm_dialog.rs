//! Confirm Dialog Component
//!
//! Modal-on-modal asking before an external link is followed.

use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: String,
    text: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay modal-overlay--confirm",
            onclick: move |e| {
                e.stop_propagation();
                on_cancel.call(());
            },

            div {
                class: "confirm-dialog",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                h3 { class: "modal-title", "{title}" }
                p { class: "modal-description", "{text}" }

                div { class: "modal-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
