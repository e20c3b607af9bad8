//! Reducer for the control panel.

use crate::mvi::Reducer;

use super::intent::ControlsIntent;
use super::state::{Control, ControlsState};

/// Field buffers are capped; longer input cannot be a valid number anyway.
const MAX_FIELD_LEN: usize = 12;

pub struct ControlsReducer;

impl Reducer for ControlsReducer {
    type State = ControlsState;
    type Intent = ControlsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let editing = intent.is_edit_of(state.focus);
        match intent {
            ControlsIntent::FocusNext => ControlsState {
                focus: state.focus.next(),
                ..state
            },
            ControlsIntent::FocusPrev => ControlsState {
                focus: state.focus.prev(),
                ..state
            },
            ControlsIntent::Insert(ch) if editing && !ch.is_control() => {
                edit_focused(state, |buffer| {
                    if buffer.chars().count() < MAX_FIELD_LEN {
                        buffer.push(ch);
                    }
                })
            }
            ControlsIntent::Backspace if editing => edit_focused(state, |buffer| {
                buffer.pop();
            }),
            ControlsIntent::Insert(_) | ControlsIntent::Backspace => state,
            ControlsIntent::Prefill {
                duration,
                start_time,
            } => ControlsState {
                duration_input: duration.to_string(),
                start_time_input: start_time.to_string(),
                ..state
            },
            ControlsIntent::Notify(notice) => ControlsState {
                notice: Some(notice),
                ..state
            },
        }
    }
}

/// Apply `edit` to the focused buffer. Editing clears a stale notice.
fn edit_focused(mut state: ControlsState, edit: impl FnOnce(&mut String)) -> ControlsState {
    let buffer = match state.focus {
        Control::Duration => &mut state.duration_input,
        Control::StartTime => &mut state.start_time_input,
        _ => return state,
    };
    edit(buffer);
    state.notice = None;
    state
}
