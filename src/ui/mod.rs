//! Terminal UI: theme, toast renderer, and the demo event loop.

pub mod app;
pub mod terminal_guard;
pub mod theme;
pub mod toasts;
