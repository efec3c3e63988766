//! Shared test utilities.

#![allow(dead_code)]

use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use toastline::{Notification, Renderer, Slide, ToastId};

/// One recorded renderer call, stamped with the elapsed (virtual) time
/// since the recorder was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererCall {
    /// id, message, composed class
    Insert(ToastId, String, String),
    Slide(ToastId, Slide),
    Remove(ToastId),
}

/// Renderer that records every call instead of drawing.
///
/// Create it inside the test body so its epoch lines up with the paused
/// tokio clock.
pub struct RecordingRenderer {
    started: Instant,
    calls: Mutex<Vec<(Duration, RendererCall)>>,
    live: Mutex<Vec<ToastId>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            calls: Mutex::new(Vec::new()),
            live: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Duration, RendererCall)> {
        self.calls.lock().clone()
    }

    /// Ids currently held, in insertion order.
    pub fn live(&self) -> Vec<ToastId> {
        self.live.lock().clone()
    }

    /// Simulates an external reset: drops every toast without recording
    /// a removal.
    pub fn clear_externally(&self) {
        self.live.lock().clear();
    }

    fn record(&self, call: RendererCall) {
        self.calls.lock().push((self.started.elapsed(), call));
    }
}

impl Renderer for RecordingRenderer {
    fn insert(&self, notification: Notification) -> ToastId {
        let id = ToastId::next();
        self.record(RendererCall::Insert(
            id,
            notification.message().to_string(),
            notification.class(),
        ));
        self.live.lock().push(id);
        id
    }

    fn slide(&self, id: ToastId, to: Slide) {
        self.record(RendererCall::Slide(id, to));
    }

    fn contains(&self, id: ToastId) -> bool {
        self.live.lock().contains(&id)
    }

    fn remove(&self, id: ToastId) {
        self.live.lock().retain(|held| *held != id);
        self.record(RendererCall::Remove(id));
    }
}
