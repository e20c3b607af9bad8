//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tickdown::timer::TimerState;

/// A countdown in the middle of running.
pub fn running(start_time: i64, current_time: i64) -> TimerState {
    TimerState {
        is_running: true,
        start_time,
        current_time,
        duration: 1000,
    }
}

/// Advance the (paused) tokio clock by `ms` milliseconds, letting every
/// timer that falls due fire in order.
pub async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
