//! Transient toast notifications with a fixed timed lifecycle, plus a
//! debounced-action utility.
//!
//! The core is renderer-agnostic: a [`Presenter`] drives toasts through
//! insert / slide-in / slide-out / guarded-remove against any [`Renderer`]
//! implementation, and a [`Debouncer`] collapses bursts of calls into one
//! delayed execution. The `ui` module ships a ratatui-backed renderer and a
//! small demo; `config` adds TOML settings with hot-reload.

pub mod classify;
pub mod config;
pub mod debounce;
pub mod notify;
pub mod ui;

pub use debounce::Debouncer;
pub use notify::{Kind, Notification, Presenter, Renderer, Slide, Timings, ToastId};
