//! Typed countdown actions.

use crate::error::TimerError;
use crate::mvi::Intent;
use crate::timer::input::{validate_duration, validate_start_time};

/// Actions the countdown reducer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerIntent {
    /// Rewind to `start_time` and stop.
    Reset,
    Start,
    Stop,
    /// One countdown step, issued by the scheduler.
    Tick,
    /// Change the delay between ticks (milliseconds).
    SetDuration { duration: u64 },
    /// Change the countdown origin (seconds); also rewinds `current_time`.
    SetStartTime { start_time: i64 },
}

impl Intent for TimerIntent {}

impl TimerIntent {
    /// Reject configuration values the countdown cannot run with.
    ///
    /// The reducer applies whatever it is handed; this check is done at the
    /// store boundary instead.
    pub fn validate(&self) -> Result<(), TimerError> {
        match *self {
            TimerIntent::SetDuration { duration } => validate_duration(duration).map(|_| ()),
            TimerIntent::SetStartTime { start_time } => {
                validate_start_time(start_time).map(|_| ())
            }
            _ => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimerIntent::Reset => "reset",
            TimerIntent::Start => "start",
            TimerIntent::Stop => "stop",
            TimerIntent::Tick => "tick",
            TimerIntent::SetDuration { .. } => "setDuration",
            TimerIntent::SetStartTime { .. } => "setStartTime",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimerField;

    #[test]
    fn plain_actions_always_validate() {
        for intent in [
            TimerIntent::Reset,
            TimerIntent::Start,
            TimerIntent::Stop,
            TimerIntent::Tick,
        ] {
            assert!(intent.validate().is_ok());
        }
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = TimerIntent::SetDuration { duration: 0 }
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), TimerField::Duration);
    }

    #[test]
    fn negative_start_time_is_rejected() {
        let err = TimerIntent::SetStartTime { start_time: -1 }
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), TimerField::StartTime);
        assert!(TimerIntent::SetStartTime { start_time: 0 }.validate().is_ok());
    }
}
