//! Reducer for the countdown.

use crate::mvi::Reducer;

use super::intent::TimerIntent;
use super::state::TimerState;

/// Countdown transition table.
///
/// Pure: scheduling ticks and validating user input happen outside.
pub struct TimerReducer;

impl Reducer for TimerReducer {
    type State = TimerState;
    type Intent = TimerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TimerIntent::Reset => TimerState {
                current_time: state.start_time,
                is_running: false,
                ..state
            },
            TimerIntent::Start => TimerState {
                is_running: true,
                ..state
            },
            TimerIntent::Stop => TimerState {
                is_running: false,
                ..state
            },
            TimerIntent::Tick => {
                let current_time = state.current_time - 1;
                TimerState {
                    current_time,
                    is_running: current_time > 0,
                    ..state
                }
            }
            TimerIntent::SetDuration { duration } => TimerState { duration, ..state },
            TimerIntent::SetStartTime { start_time } => TimerState {
                start_time,
                current_time: start_time,
                ..state
            },
        }
    }
}
