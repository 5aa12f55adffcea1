//! Background presence polling.
//!
//! One tokio task per subject. It polls immediately, then every `interval`,
//! and again right away when the window becomes visible. Results are
//! published on a `watch` channel so any number of views can follow them.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{PresenceState, DETECTING_TITLE};

/// Anything that can resolve a subject's presence. Implementations must not
/// fail: errors resolve to [`PresenceState::Offline`].
pub trait PresenceSource: Send + Sync + 'static {
    fn poll(&self, subject_id: u64) -> impl Future<Output = PresenceState> + Send;
}

/// What the badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceStatus {
    /// First poll still in flight.
    #[default]
    Detecting,
    Resolved(PresenceState),
}

impl PresenceStatus {
    pub fn state(&self) -> PresenceState {
        match self {
            PresenceStatus::Detecting => PresenceState::Offline,
            PresenceStatus::Resolved(state) => *state,
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.state().css_class()
    }

    pub fn title(&self) -> &'static str {
        match self {
            PresenceStatus::Detecting => DETECTING_TITLE,
            PresenceStatus::Resolved(state) => state.title(),
        }
    }
}

pub struct PresencePoller {
    status: watch::Receiver<PresenceStatus>,
    wake: Arc<Notify>,
    handle: Option<JoinHandle<()>>,
}

impl PresencePoller {
    pub fn spawn<S: PresenceSource>(source: S, subject_id: u64, interval: Duration) -> Self {
        let (tx, status) = watch::channel(PresenceStatus::Detecting);
        let wake = Arc::new(Notify::new());
        let task_wake = wake.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = task_wake.notified() => {
                        ticker.reset();
                    }
                }
                let state = source.poll(subject_id).await;
                tx.send_replace(PresenceStatus::Resolved(state));
            }
        });

        tracing::info!(subject_id, interval_secs = interval.as_secs(), "presence poller started");
        Self {
            status,
            wake,
            handle: Some(handle),
        }
    }

    pub fn current(&self) -> PresenceStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PresenceStatus> {
        self.status.clone()
    }

    /// Window visibility changed. Becoming visible triggers an immediate poll.
    pub fn visibility_changed(&self, visible: bool) {
        if visible {
            self.wake.notify_one();
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("presence poller stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for PresencePoller {
    fn drop(&mut self) {
        self.stop();
    }
}
