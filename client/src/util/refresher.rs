//! Cancellable fixed-interval polling.
//!
//! DESIGN
//! ======
//! The loop sleeps first and checks its handle after every wake-up, so a
//! cancel during the sleep suppresses the pending tick. The sleep function is
//! injected: `gloo_timers` in the browser, a simulated clock in tests.
//!
//! A tick already in flight when the handle is cancelled still completes; its
//! write lands on a store nobody is watching any more.

#[cfg(test)]
#[path = "refresher_test.rs"]
mod refresher_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// How often the header re-reads the session.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Liveness flag shared between a poll loop and the component that owns it.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl PollHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `tick` every `interval` until `handle` is cancelled.
pub async fn run_poll_loop<S, SF, T, TF>(handle: PollHandle, interval: Duration, mut sleep: S, mut tick: T)
where
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    loop {
        sleep(interval).await;
        if !handle.is_alive() {
            break;
        }
        tick().await;
    }
}

/// Spawn a session poll owned by the current reactive scope.
///
/// The loop is cancelled when the owning component is torn down.
#[cfg(feature = "hydrate")]
pub fn spawn_owned_poll<T, TF>(interval: Duration, tick: T)
where
    T: FnMut() -> TF + 'static,
    TF: Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();
    let task_handle = handle.clone();
    leptos::task::spawn_local(run_poll_loop(task_handle, interval, gloo_timers::future::sleep, tick));
    leptos::prelude::on_cleanup(move || handle.cancel());
}
