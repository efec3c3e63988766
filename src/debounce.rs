//! Debounced actions.
//!
//! A [`Debouncer`] wraps a single action so that rapid repeated calls
//! collapse into one delayed execution: every call restarts the wait, and
//! only the latest call's value reaches the action. The same quiet-period
//! loop backs config hot-reload, where bursts of filesystem events must
//! become a single reload.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Wraps an action behind a quiet-period timer.
///
/// At most one execution is ever pending; a call made before the wait
/// elapses cancels the previous pending execution and restarts the wait
/// with its own value.
pub struct Debouncer<T: Send + 'static> {
    tx: mpsc::UnboundedSender<T>,
    // Owns the worker; dropping the sender stops it.
    _worker: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wraps `action` so it only runs after `wait` of quiet.
    ///
    /// Must be called from within a tokio runtime. A `wait` of zero still
    /// defers to the scheduler; the action never runs inside [`call`].
    ///
    /// [`call`]: Debouncer::call
    pub fn new<F>(wait: Duration, mut action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        let worker = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    tokio::select! {
                        // Queued calls must win over an elapsed timer, or a
                        // same-instant burst could fire once per value instead
                        // of once with the latest.
                        biased;
                        next = rx.recv() => match next {
                            // A newer call restarts the wait with its value.
                            Some(value) => latest = value,
                            // Debouncer dropped; the pending execution is
                            // cancelled, not flushed.
                            None => return,
                        },
                        () = tokio::time::sleep(wait) => {
                            tracing::debug!(wait_ms = wait.as_millis() as u64, "debounce quiet period elapsed");
                            action(latest);
                            break;
                        }
                    }
                }
            }
        });

        Self { tx, _worker: worker }
    }

    /// Records a call with `value`. Non-blocking; the latest value wins.
    pub fn call(&self, value: T) {
        // Only fails once the worker is gone, which requires drop first.
        let _ = self.tx.send(value);
    }
}
