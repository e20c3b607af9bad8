//! Derived values read by the view.

use super::state::TimerState;

pub fn duration(state: &TimerState) -> u64 {
    state.duration
}

pub fn current_time(state: &TimerState) -> i64 {
    state.current_time
}

pub fn is_running(state: &TimerState) -> bool {
    state.is_running
}

pub fn start_time(state: &TimerState) -> i64 {
    state.start_time
}

/// The countdown sits at its origin.
pub fn is_resetted(state: &TimerState) -> bool {
    state.current_time == state.start_time
}

pub fn is_done(state: &TimerState) -> bool {
    state.current_time == 0
}

/// Which controls accept activation for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAvailability {
    pub stop: bool,
    pub reset: bool,
    pub start: bool,
    /// Both configuration forms share this gate.
    pub configure: bool,
}

pub fn availability(state: &TimerState) -> ControlAvailability {
    let running = is_running(state);
    ControlAvailability {
        stop: running,
        reset: !running && !is_resetted(state),
        start: !running && !is_done(state),
        configure: !running,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_allows_start_and_configure_only() {
        let gates = availability(&TimerState::default());
        assert_eq!(
            gates,
            ControlAvailability {
                stop: false,
                reset: false,
                start: true,
                configure: true,
            }
        );
    }

    #[test]
    fn running_allows_stop_only() {
        let state = TimerState {
            is_running: true,
            current_time: 6,
            ..TimerState::default()
        };
        let gates = availability(&state);
        assert!(gates.stop);
        assert!(!gates.reset);
        assert!(!gates.start);
        assert!(!gates.configure);
    }

    #[test]
    fn done_allows_reset_but_not_start() {
        let state = TimerState {
            current_time: 0,
            ..TimerState::default()
        };
        assert!(is_done(&state));
        let gates = availability(&state);
        assert!(gates.reset);
        assert!(!gates.start);
    }

    #[test]
    fn stopped_midway_allows_start_and_reset() {
        let state = TimerState {
            current_time: 3,
            ..TimerState::default()
        };
        let gates = availability(&state);
        assert!(gates.start);
        assert!(gates.reset);
        assert!(!is_resetted(&state));
    }
}
