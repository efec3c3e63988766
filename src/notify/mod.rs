//! Fire-and-forget toast notifications.
//!
//! A [`Presenter`] drives each [`Notification`] through a fixed timeline
//! against an injected [`Renderer`]: inserted off screen, slid in after a
//! short delay, slid back out once the visible window elapses, then removed.
//! Every toast owns its own timeline; nothing is shared between concurrent
//! toasts and nothing is reported back to callers.

mod notification;
mod presenter;
mod renderer;

pub use notification::{Kind, Notification, ToastId};
pub use presenter::{Presenter, Timings};
pub use renderer::{Renderer, Slide};
