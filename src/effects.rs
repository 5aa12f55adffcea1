//! Host side of gallery effects: page scroll and external links.

use dioxus::prelude::*;
use portfolio_core::Effect;

const FREEZE_SCROLL: &str = "document.body.classList.add('modal-open'); return window.scrollY;";

// Runs after the next paint so the freshly rendered root exists
const FOCUS_GALLERY: &str = "requestAnimationFrame(() => { \
    const root = document.querySelector('.gallery-root:not(.gallery-root--closing)'); \
    if (root) { root.focus(); } \
});";

fn restore_scroll_script(y: f64) -> String {
    format!("document.body.classList.remove('modal-open'); window.scrollTo(0, {});", y)
}

fn open_external_script(url: &str) -> String {
    // JSON string literal is a valid JS string literal
    let literal = serde_json::to_string(url).unwrap_or_else(|_| "\"about:blank\"".to_string());
    format!("window.open({}, '_blank', 'noopener');", literal)
}

/// Lock page scrolling and report where the page was.
pub async fn freeze_scroll() -> f64 {
    match document::eval(FREEZE_SCROLL).join::<f64>().await {
        Ok(y) => y,
        Err(e) => {
            tracing::debug!(error = ?e, "could not read scroll position");
            0.0
        }
    }
}

/// Move keyboard focus into the open gallery so Escape reaches it.
pub fn focus_gallery() {
    let _ = document::eval(FOCUS_GALLERY);
}

pub fn apply(effects: Vec<Effect>) {
    for effect in effects {
        let script = match &effect {
            Effect::OpenExternal(url) => {
                tracing::info!(%url, "opening external link");
                open_external_script(url)
            }
            Effect::RestoreScroll(y) => restore_scroll_script(*y),
        };
        let _ = document::eval(&script);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_url_is_quoted() {
        let script = open_external_script("https://example.com/a'b\"c");
        assert_eq!(
            script,
            r#"window.open("https://example.com/a'b\"c", '_blank', 'noopener');"#
        );
    }

    #[test]
    fn focus_targets_open_gallery_only() {
        assert!(FOCUS_GALLERY.starts_with("requestAnimationFrame("));
        assert!(FOCUS_GALLERY.contains(".gallery-root:not(.gallery-root--closing)"));
        assert!(FOCUS_GALLERY.contains("root.focus()"));
    }

    #[test]
    fn restore_scroll_unlocks_body() {
        let script = restore_scroll_script(120.5);
        assert!(script.contains("classList.remove('modal-open')"));
        assert!(script.ends_with("window.scrollTo(0, 120.5);"));
    }
}
