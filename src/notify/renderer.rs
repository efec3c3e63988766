//! Renderer seam between the presenter and whatever draws toasts.

use crate::notify::notification::{Notification, ToastId};

/// Horizontal slide state of a toast relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Translated fully past the edge; not visible.
    OffScreen,
    /// At the anchor position.
    OnScreen,
}

/// Drawing capability handed to a presenter.
///
/// The presenter only ever issues these four calls; colors, placement, and
/// clipping belong to the implementation. Implementations are shared across
/// the per-toast tasks, so every method takes `&self`.
pub trait Renderer: Send + Sync + 'static {
    /// Inserts a toast in the off-screen slide state and returns its handle.
    fn insert(&self, notification: Notification) -> ToastId;

    /// Updates the slide state of a previously inserted toast.
    ///
    /// Unknown ids are ignored; the toast may have been cleared externally.
    fn slide(&self, id: ToastId, to: Slide);

    /// Whether the toast is still held by this renderer.
    fn contains(&self, id: ToastId) -> bool;

    /// Removes the toast. Must tolerate ids that are already gone.
    fn remove(&self, id: ToastId);
}
