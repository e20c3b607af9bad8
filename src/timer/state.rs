//! Countdown state.

use crate::mvi::UiState;
use std::time::Duration;

pub const DEFAULT_START_TIME: i64 = 10;
pub const DEFAULT_DURATION_MS: u64 = 1000;

/// Snapshot of the countdown.
///
/// `current_time` is signed: the reducer does not clamp, so a tick applied
/// at zero produces `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Whether the countdown is actively ticking.
    pub is_running: bool,
    /// Countdown origin in seconds, restored on reset.
    pub start_time: i64,
    /// Remaining seconds.
    pub current_time: i64,
    /// Milliseconds between ticks.
    pub duration: u64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::idle(DEFAULT_START_TIME, DEFAULT_DURATION_MS)
    }
}

impl UiState for TimerState {}

/// Coarse classification of a [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    /// Not running, `current_time == start_time`.
    Idle,
    Running,
    /// Paused mid-count.
    Stopped,
    /// Not running, countdown reached zero.
    Done,
}

impl CountdownPhase {
    pub fn label(self) -> &'static str {
        match self {
            CountdownPhase::Idle => "Idle",
            CountdownPhase::Running => "Running",
            CountdownPhase::Stopped => "Stopped",
            CountdownPhase::Done => "Done",
        }
    }
}

impl TimerState {
    /// A stopped countdown sitting at its origin.
    pub fn idle(start_time: i64, duration: u64) -> Self {
        Self {
            is_running: false,
            start_time,
            current_time: start_time,
            duration,
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        if self.is_running {
            CountdownPhase::Running
        } else if self.current_time <= 0 {
            CountdownPhase::Done
        } else if self.current_time == self.start_time {
            CountdownPhase::Idle
        } else {
            CountdownPhase::Stopped
        }
    }

    /// Delay between ticks as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_ten_seconds() {
        let state = TimerState::default();
        assert!(!state.is_running);
        assert_eq!(state.start_time, 10);
        assert_eq!(state.current_time, 10);
        assert_eq!(state.duration, 1000);
        assert_eq!(state.phase(), CountdownPhase::Idle);
    }

    #[test]
    fn phase_classification() {
        let running = TimerState {
            is_running: true,
            ..TimerState::default()
        };
        assert_eq!(running.phase(), CountdownPhase::Running);

        let paused = TimerState {
            current_time: 4,
            ..TimerState::default()
        };
        assert_eq!(paused.phase(), CountdownPhase::Stopped);

        let done = TimerState {
            current_time: 0,
            ..TimerState::default()
        };
        assert_eq!(done.phase(), CountdownPhase::Done);
    }

    #[test]
    fn zero_start_time_reads_as_done() {
        assert_eq!(TimerState::idle(0, 1000).phase(), CountdownPhase::Done);
    }

    #[test]
    fn tick_interval_uses_duration() {
        let state = TimerState::idle(3, 250);
        assert_eq!(state.tick_interval(), Duration::from_millis(250));
    }
}
