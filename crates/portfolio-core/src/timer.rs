//! Restartable, cancelable timers backed by tokio tasks.
//!
//! Starting a timer always cancels the previous one, so "reset" is just
//! `start_*` again. Dropping the timer aborts its task.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug, Default)]
pub struct RestartableTimer {
    handle: Option<JoinHandle<()>>,
}

impl RestartableTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `tick` every `period`, first after one full period. The loop ends
    /// when `tick` returns `false`.
    pub fn start_repeating<F>(&mut self, period: Duration, mut tick: F)
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !tick() {
                    break;
                }
            }
        }));
    }

    /// Call `fire` once after `delay`.
    pub fn start_once<F>(&mut self, delay: Duration, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RestartableTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn repeating_timer_ticks_each_period() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timer = RestartableTimer::new();
        let c = count.clone();
        timer.start_repeating(Duration::from_secs(6), move || {
            c.fetch_add(1, Ordering::SeqCst);
            true
        });

        tokio::time::sleep(Duration::from_millis(5_900)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(12_200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_resets_elapsed_time() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut timer = RestartableTimer::new();
        for _ in 0..2 {
            let c = count.clone();
            timer.start_repeating(Duration::from_secs(6), move || {
                c.fetch_add(1, Ordering::SeqCst);
                true
            });
            tokio::time::sleep(Duration::from_secs(4)).await;
        }
        // 8s elapsed in total but never 6s since the last restart
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_pending_fire() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timer = RestartableTimer::new();
        let f = fired.clone();
        timer.start_once(Duration::from_secs(5), move || {
            f.fetch_add(1, Ordering::SeqCst);
        });
        timer.cancel();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn repeating_stops_when_tick_declines() {
        let mut timer = RestartableTimer::new();
        timer.start_repeating(Duration::from_secs(1), || false);
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!timer.is_running());
    }
}
