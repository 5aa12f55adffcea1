//! Presence Badge - avatar ring coloured by the developer's Roblox presence.

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::use_wry_event_handler;
use dioxus::prelude::*;
use portfolio_core::{PresencePoller, PresenceStatus};

use crate::components::images::AvatarImage;
use crate::context::use_app_context;

/// Start the app-wide presence poller and share its status through context.
///
/// Call once from the root component so the poller outlives route changes.
/// Window focus counts as the page becoming visible and triggers an
/// immediate poll.
pub fn use_presence_provider() -> Signal<PresenceStatus> {
    let ctx = use_app_context();
    let mut status = use_signal(PresenceStatus::default);
    use_context_provider(|| status);

    let poller = use_hook(|| {
        std::rc::Rc::new(PresencePoller::spawn(
            ctx.presence_client(),
            ctx.user_id,
            ctx.config.presence_interval,
        ))
    });

    let watch_poller = poller.clone();
    use_future(move || {
        let mut updates = watch_poller.subscribe();
        async move {
            loop {
                status.set(*updates.borrow_and_update());
                if updates.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Focused(focused),
            ..
        } = event
        {
            poller.visibility_changed(*focused);
        }
    });

    status
}

/// Avatar with a single presence class on its ring.
///
/// Reads the status shared by [`use_presence_provider`]; remounting the
/// badge never restarts polling.
#[component]
pub fn PresenceBadge() -> Element {
    let status = use_context::<Signal<PresenceStatus>>();

    let current = status();
    rsx! {
        div {
            class: "avatar-ring {current.css_class()}",
            title: "{current.title()}",
            AvatarImage {}
            span { class: "avatar-ring__label", "{current.title()}" }
        }
    }
}
