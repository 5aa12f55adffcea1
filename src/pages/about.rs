//! About page - who the developer is.

use dioxus::prelude::*;
use portfolio_core::catalog::ABOUT;
use portfolio_core::Effect;

use crate::components::{NavHeader, NavLocation};
use crate::effects;

#[component]
pub fn About() -> Element {
    let founder = ABOUT.founder;
    let founder_url = founder.url;

    rsx! {
        NavHeader { current: NavLocation::About }

        main { class: "page about",
            h2 { class: "page-title", "{ABOUT.title}" }
            p { class: "body-text", "{ABOUT.description}" }

            ul { class: "info-list",
                for item in ABOUT.info {
                    li { key: "{item.label}",
                        span { class: "info-list__label", "{item.label}" }
                        " "
                        span { class: "info-list__value", "{item.value}" }
                    }
                }
            }

            button {
                class: "founder-link",
                onclick: move |_| effects::apply(vec![Effect::OpenExternal(founder_url.to_string())]),
                img { src: "{founder.icon}", alt: "{founder.icon_alt}" }
                span { "{founder.text}" }
            }
        }
    }
}
