use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::notify::Timings;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timings: TimingsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Quiet period for config hot-reload, in milliseconds.
    #[serde(default = "default_reload_debounce_ms")]
    pub reload_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timings: TimingsConfig::default(),
            theme: ThemeConfig::default(),
            reload_debounce_ms: default_reload_debounce_ms(),
        }
    }
}

/// Toast timeline stage delays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingsConfig {
    /// Delay before a toast slides on screen.
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: u64,
    /// Time from insertion until a toast starts sliding back out.
    #[serde(default = "default_visible_ms")]
    pub visible_ms: u64,
    /// Exit animation length before removal.
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: default_enter_delay_ms(),
            visible_ms: default_visible_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

impl TimingsConfig {
    pub fn to_timings(&self) -> Timings {
        Timings {
            enter_delay: Duration::from_millis(self.enter_delay_ms),
            visible: Duration::from_millis(self.visible_ms),
            exit: Duration::from_millis(self.exit_ms),
        }
    }
}

/// Toast background colors as `#rrggbb` hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_success_color")]
    pub success: String,
    #[serde(default = "default_error_color")]
    pub error: String,
    #[serde(default = "default_info_color")]
    pub info: String,
    #[serde(default = "default_warning_color")]
    pub warning: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            success: default_success_color(),
            error: default_error_color(),
            info: default_info_color(),
            warning: default_warning_color(),
        }
    }
}

fn default_reload_debounce_ms() -> u64 {
    200
}

fn default_enter_delay_ms() -> u64 {
    100
}

fn default_visible_ms() -> u64 {
    3000
}

fn default_exit_ms() -> u64 {
    300
}

fn default_success_color() -> String {
    "#4caf50".to_string()
}

fn default_error_color() -> String {
    "#f44336".to_string()
}

fn default_info_color() -> String {
    "#2196f3".to_string()
}

fn default_warning_color() -> String {
    "#ff9800".to_string()
}
