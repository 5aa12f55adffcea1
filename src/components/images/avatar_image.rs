//! Avatar Image Loader
//!
//! Fetches the Roblox avatar through the proxy and shows it as a data URI.

use base64::Engine;
use dioxus::prelude::*;
use portfolio_core::presence::AVATAR_PLACEHOLDER;

use crate::context::use_app_context;

/// Avatar for the configured user, falling back to an inline placeholder.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     AvatarImage { class: "avatar-ring__img".to_string() }
/// }
/// ```
#[component]
pub fn AvatarImage(
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let ctx = use_app_context();
    let mut image_data = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let ctx = ctx.clone();
        spawn(async move {
            loading.set(true);
            match ctx.fetch_avatar().await {
                Ok((content_type, bytes)) => {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    image_data.set(Some(format!("data:{};base64,{}", content_type, encoded)));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "avatar unavailable, showing placeholder");
                    image_data.set(None);
                }
            }
            loading.set(false);
        });
    });

    let mut css_class = class.unwrap_or_else(|| "avatar__img".to_string());
    if loading() {
        css_class.push_str(" loading");
    }
    let src = image_data().unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string());

    rsx! {
        img {
            class: "{css_class}",
            src: "{src}",
            alt: "Avatar",
        }
    }
}
