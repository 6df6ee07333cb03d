//! Call-rate limiting for chatty event sources.
//!
//! [`Debouncer`] delays work until the caller has been quiet for the whole
//! wait window, restarting the timer on every call. [`Throttler`] fires at
//! most once per window: immediately when the window has elapsed, otherwise
//! queuing a single trailing invocation for the end of the window.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

/// Trailing-edge debouncer. Each [`call`](Debouncer::call) cancels the
/// previously scheduled invocation, so only the last call in a burst runs.
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `f` to run after the wait window, aborting whatever was
    /// scheduled before. Must be called from within a tokio runtime.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // The deadline is fixed here, not when the task is first polled,
        // so it is measured from the call itself.
        let deadline = Instant::now() + self.wait;
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            f();
        });
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Drop any scheduled invocation without running it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct ThrottleState {
    last_fire: Option<Instant>,
    trailing: Option<JoinHandle<()>>,
}

/// Leading-edge throttler with a trailing call.
///
/// The first call in a window runs immediately; later calls inside the same
/// window replace the one trailing invocation scheduled for the window's
/// end, so a steady stream of calls fires roughly once per window and the
/// final call is never lost.
pub struct Throttler {
    window: Duration,
    state: Arc<Mutex<ThrottleState>>,
}

impl Throttler {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: Arc::new(Mutex::new(ThrottleState {
                last_fire: None,
                trailing: None,
            })),
        }
    }

    /// Run `f` now if the window has elapsed, otherwise queue it as the
    /// trailing call. Must be called from within a tokio runtime.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let now = Instant::now();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let elapsed = state
            .last_fire
            .map(|last| now.duration_since(last))
            .unwrap_or(self.window);
        if elapsed >= self.window {
            if let Some(trailing) = state.trailing.take() {
                trailing.abort();
            }
            state.last_fire = Some(now);
            drop(state);
            f();
            return;
        }

        let deadline = now + (self.window - elapsed);
        let shared = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            {
                let mut state = shared.lock().unwrap_or_else(|e| e.into_inner());
                state.last_fire = Some(Instant::now());
                state.trailing = None;
            }
            f();
        });
        if let Some(previous) = state.trailing.replace(handle) {
            previous.abort();
        }
    }

    /// Drop any queued trailing call without running it.
    pub fn cancel(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = state.trailing.take() {
            handle.abort();
        }
    }
}

impl Drop for Throttler {
    fn drop(&mut self) {
        self.cancel();
    }
}
