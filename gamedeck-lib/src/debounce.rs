//! Trailing-edge debouncing on the tokio runtime.

use std::future::Future;

use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Delay applied to window resize events before re-rendering.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Runs only the most recent of a burst of triggers, once the delay has
/// elapsed without another trigger.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Debouncer for resize events.
    pub fn for_resize() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }

    /// Schedule `action` after the delay, cancelling any pending action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Drop the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
