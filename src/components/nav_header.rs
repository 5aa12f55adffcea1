//! Navigation Header Component
//!
//! Presence badge and name on the left, section links in the middle,
//! language and theme controls on the right.

use dioxus::prelude::*;
use portfolio_core::Language;

use crate::app::Route;
use crate::components::profile::PresenceBadge;
use crate::context::{update_preferences, use_app_context, use_preferences};

/// Section of the site
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    About,
    Games,
    Projects,
    Store,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::About,
        NavLocation::Games,
        NavLocation::Projects,
        NavLocation::Store,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::About => "About",
            NavLocation::Games => "Games",
            NavLocation::Projects => "Projects",
            NavLocation::Store => "Store",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::About => Route::About {},
            NavLocation::Games => Route::Games {},
            NavLocation::Projects => Route::Projects {},
            NavLocation::Store => Route::Store {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current section
    pub current: NavLocation,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let ctx = use_app_context();
    let mut preferences = use_preferences();
    let prefs = preferences();

    let select_ctx = ctx.clone();
    let on_language = move |e: FormEvent| {
        let Some(language) = Language::from_code(&e.value()) else {
            tracing::debug!(code = %e.value(), "unknown language code");
            return;
        };
        update_preferences(&select_ctx, &mut preferences, |p| p.language = language);
    };

    let on_theme = move |_| {
        update_preferences(&ctx, &mut preferences, |p| p.theme = p.theme.toggled());
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    PresenceBadge {}
                    h1 { class: "app-title", "PimpoliDev" }
                }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if location == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }

                div { class: "nav-controls",
                    select {
                        class: "language-select",
                        "aria-label": "Language",
                        value: "{prefs.language.code()}",
                        onchange: on_language,
                        for language in Language::ALL {
                            option {
                                value: "{language.code()}",
                                selected: language == prefs.language,
                                "{language.native_name()}"
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "theme-toggle",
                        "aria-label": "Toggle theme",
                        onclick: on_theme,
                        "{prefs.theme.toggled().as_str()}"
                    }
                }
            }
        }
    }
}
