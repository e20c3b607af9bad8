use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::timer::{TimerState, DEFAULT_DURATION_MS, DEFAULT_START_TIME};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial countdown values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Countdown origin in seconds (default: 10).
    #[serde(default = "default_start_time")]
    pub start_time: i64,
    /// Delay between ticks in milliseconds (default: 1000).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

/// Which state-management style the view dispatches with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DemoVariant {
    /// String-typed action envelopes built by action creators.
    Store,
    /// Typed intents; configuration changes are followed by a reset.
    #[default]
    Slice,
}

impl DemoVariant {
    pub fn label(self) -> &'static str {
        match self {
            DemoVariant::Store => "store",
            DemoVariant::Slice => "slice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub variant: DemoVariant,
    /// How long the input thread waits for a terminal event per poll (default: 50).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache_dir>/tickdown/tickdown.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_start_time() -> i64 {
    DEFAULT_START_TIME
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            variant: DemoVariant::default(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Countdown state the store starts from.
    pub fn initial_state(&self) -> TimerState {
        TimerState::idle(self.timer.start_time, self.timer.duration_ms)
    }
}
