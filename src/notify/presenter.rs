//! Toast lifecycle driver.
//!
//! [`Presenter::present`] is fire-and-forget: it spawns one tokio task per
//! toast that walks the fixed timeline insert -> slide in -> slide out ->
//! remove. Timelines are fully independent; presenting twice in quick
//! succession produces two overlapping toasts at the same anchor.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::notify::notification::{Kind, Notification};
use crate::notify::renderer::{Renderer, Slide};

/// Stage delays for the toast timeline.
///
/// `enter_delay` and `visible` are both measured from insertion; `exit` is
/// the trailing window between sliding out and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay before the toast slides on screen.
    pub enter_delay: Duration,
    /// Time from insertion until the toast starts sliding back out.
    pub visible: Duration,
    /// Exit animation length; removal happens once it elapses.
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(100),
            visible: Duration::from_millis(3000),
            exit: Duration::from_millis(300),
        }
    }
}

/// Presents transient toasts against an injected [`Renderer`].
pub struct Presenter<R: Renderer> {
    renderer: Arc<R>,
    timings: Timings,
}

impl<R: Renderer> Clone for Presenter<R> {
    fn clone(&self) -> Self {
        Self {
            renderer: Arc::clone(&self.renderer),
            timings: self.timings,
        }
    }
}

impl<R: Renderer> Presenter<R> {
    /// Creates a presenter with the stock timeline (100ms in, 3s visible,
    /// 300ms out).
    pub fn new(renderer: Arc<R>) -> Self {
        Self::with_timings(renderer, Timings::default())
    }

    pub fn with_timings(renderer: Arc<R>, timings: Timings) -> Self {
        Self { renderer, timings }
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Shows a toast and returns immediately.
    ///
    /// The full timeline always runs to completion; there is no cancellation
    /// path and nothing is reported back to the caller. Must be called from
    /// within a tokio runtime.
    pub fn present(&self, message: impl Into<String>, kind: Kind) {
        let renderer = Arc::clone(&self.renderer);
        let timings = self.timings;
        let notification = Notification::new(message, kind);

        tokio::spawn(async move {
            let id = renderer.insert(notification);
            tracing::debug!(?id, "toast inserted off screen");

            sleep(timings.enter_delay).await;
            renderer.slide(id, Slide::OnScreen);

            sleep(timings.visible.saturating_sub(timings.enter_delay)).await;
            renderer.slide(id, Slide::OffScreen);
            tracing::debug!(?id, "toast exiting");

            sleep(timings.exit).await;
            // The toast may have been cleared externally between the exit
            // and this point; removal is guarded on containment.
            if renderer.contains(id) {
                renderer.remove(id);
                tracing::debug!(?id, "toast removed");
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.present(message, Kind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.present(message, Kind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.present(message, Kind::Info);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.present(message, Kind::Warning);
    }
}
