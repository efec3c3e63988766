//! Config hot-reload with file watching and debouncing.
//!
//! Provides thread-safe config access and automatic reload on file changes.
//! Raw filesystem events are funneled through a [`Debouncer`] so a burst of
//! editor writes becomes a single reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;
use crate::debounce::Debouncer;

/// Errors that can occur during config watching.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("Failed to create file watcher: {0}")]
    WatcherInit(#[from] notify::Error),

    #[error("Config path has no parent directory")]
    NoParentDir,
}

/// Outcome of a debounced reload attempt.
#[derive(Debug, Clone)]
pub enum ReloadEvent {
    /// Config was reloaded successfully.
    Reloaded,
    /// Reload failed; the previous config is still in effect.
    Failed(String),
}

/// Thread-safe config container with interior mutability.
///
/// Allows multiple readers to access config concurrently while
/// supporting atomic updates during reload.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    ///
    /// This is cheap because Config is Clone.
    /// Multiple readers can call this concurrently.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    /// Get the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Watches the config file and triggers debounced reloads on changes.
///
/// Sends a [`ReloadEvent`] for every reload attempt so the UI can surface
/// the outcome.
pub struct ConfigWatcher {
    // The watcher is kept alive by being stored here.
    // When ConfigWatcher is dropped, watching stops.
    _watcher: RecommendedWatcher,
    // Dropping the debouncer cancels any pending reload.
    _debounce: Arc<Debouncer<()>>,
}

impl ConfigWatcher {
    /// Start watching the config file.
    ///
    /// # Arguments
    /// * `store` - The ConfigStore to reload
    /// * `event_tx` - Channel to send reload outcomes to the UI
    /// * `debounce` - Quiet period before a reload fires (typically 200ms)
    ///
    /// Must be called from within a tokio runtime (the debounce worker is a
    /// spawned task).
    ///
    /// # Errors
    /// Returns an error if the watcher cannot be initialized or the path is
    /// invalid.
    pub fn start(
        store: ConfigStore,
        event_tx: mpsc::UnboundedSender<ReloadEvent>,
        debounce: Duration,
    ) -> Result<Self, WatcherError> {
        let config_path = store.path().to_path_buf();
        let watch_dir = config_path
            .parent()
            .ok_or(WatcherError::NoParentDir)?
            .to_path_buf();
        let config_filename = config_path
            .file_name()
            .map(|s| s.to_os_string())
            .unwrap_or_default();

        let debouncer = Arc::new(Debouncer::new(debounce, move |()| {
            match store.reload() {
                Ok(()) => {
                    tracing::info!(path = %store.path().display(), "config reloaded");
                    let _ = event_tx.send(ReloadEvent::Reloaded);
                }
                Err(e) => {
                    tracing::warn!(path = %store.path().display(), "config reload failed: {e}");
                    let _ = event_tx.send(ReloadEvent::Failed(e.to_string()));
                }
            }
        }));

        // notify runs this callback on its own thread; Debouncer::call is a
        // plain channel send, safe from there.
        let trigger = Arc::clone(&debouncer);
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    if is_config_event(&event, &config_filename) {
                        trigger.call(());
                    }
                }
            },
            notify::Config::default(),
        )?;

        // Watch the parent directory (handles file deletion + recreation)
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            _debounce: debouncer,
        })
    }
}

/// Check if a notify event affects the config file.
fn is_config_event(event: &Event, config_filename: &std::ffi::OsString) -> bool {
    // Only care about modifications, creates, and removes
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );

    if !relevant {
        return false;
    }

    // Check if any of the affected paths match our config file
    event.paths.iter().any(|p| {
        p.file_name()
            .map(|name| name == config_filename)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_config(dir: &Path) -> PathBuf {
        let config_path = dir.join("config.toml");
        let content = r#"
[timings]
enter_delay_ms = 10
visible_ms = 200
exit_ms = 30
"#;
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn config_store_get_returns_current() {
        let config = Config::default();
        let store = ConfigStore::new(config.clone(), PathBuf::from("/test/config.toml"));
        let retrieved = store.get();
        assert_eq!(retrieved.timings.visible_ms, config.timings.visible_ms);
    }

    #[test]
    fn config_store_reload_replaces_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_test_config(temp_dir.path());

        let store = ConfigStore::new(Config::default(), config_path);

        store.reload().unwrap();
        let reloaded = store.get();
        assert_eq!(reloaded.timings.visible_ms, 200);
        assert_eq!(reloaded.timings.enter_delay_ms, 10);
    }

    #[test]
    fn config_store_reload_keeps_old_on_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "invalid { toml }").unwrap();

        let initial = Config::default();
        let store = ConfigStore::new(initial.clone(), config_path);

        assert!(store.reload().is_err());

        // Original config should be preserved
        let current = store.get();
        assert_eq!(current.timings.visible_ms, initial.timings.visible_ms);
    }

    #[test]
    fn irrelevant_events_are_filtered() {
        let filename = std::ffi::OsString::from("config.toml");

        let event = Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(PathBuf::from("/some/dir/other.toml"));
        assert!(!is_config_event(&event, &filename));

        let event = Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(PathBuf::from("/some/dir/config.toml"));
        assert!(is_config_event(&event, &filename));

        let event = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("/some/dir/config.toml"));
        assert!(!is_config_event(&event, &filename));
    }
}
