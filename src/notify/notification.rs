//! Core notification data structures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Handle for a toast held by a renderer.
///
/// Allocated from a process-wide counter so ids stay unique across
/// renderer instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates the next unique id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Notification kind; determines styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Kind {
    /// Lowercase name used in the composed style class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
            Kind::Warning => "warning",
        }
    }

    /// Composed style class, `notification notification-<kind>`.
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// A single transient message on its way through the toast timeline.
///
/// Notifications carry no identity of their own; the renderer hands out a
/// [`ToastId`] when one is inserted.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    kind: Kind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: Kind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Composed style class of this notification's kind.
    pub fn class(&self) -> String {
        self.kind.class()
    }
}
