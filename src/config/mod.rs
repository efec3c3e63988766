//! Configuration: TOML-backed settings with validation and hot-reload.

mod loader;
mod types;
mod watcher;

pub use loader::ConfigError;
pub use types::{Config, ThemeConfig, TimingsConfig};
pub use watcher::{ConfigStore, ConfigWatcher, ReloadEvent, WatcherError};
