//! Intents for the control panel.

use crate::mvi::Intent;

use super::state::{Control, Notice};

#[derive(Debug, Clone)]
pub enum ControlsIntent {
    FocusNext,
    FocusPrev,
    /// Type a character into the focused field. No-op on buttons.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Overwrite both field buffers, e.g. from the store's current values.
    Prefill { duration: u64, start_time: i64 },
    /// Replace the notice line.
    Notify(Notice),
}

impl Intent for ControlsIntent {}

impl ControlsIntent {
    pub fn focus_step(forward: bool) -> Self {
        if forward {
            ControlsIntent::FocusNext
        } else {
            ControlsIntent::FocusPrev
        }
    }

    pub fn is_edit_of(&self, control: Control) -> bool {
        control.is_field() && matches!(self, ControlsIntent::Insert(_) | ControlsIntent::Backspace)
    }
}
