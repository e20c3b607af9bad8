//! State for the control panel.

use crate::mvi::UiState;

/// Focusable controls, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    Stop,
    Reset,
    #[default]
    Start,
    Duration,
    StartTime,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Stop,
        Control::Reset,
        Control::Start,
        Control::Duration,
        Control::StartTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::Stop => "Stop",
            Control::Reset => "Reset",
            Control::Start => "Start",
            Control::Duration => "Duration(ms)",
            Control::StartTime => "Start Time(sec)",
        }
    }

    /// Text-entry controls (the two configuration forms).
    pub fn is_field(self) -> bool {
        matches!(self, Control::Duration | Control::StartTime)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|control| *control == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// One-line feedback under the forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlsState {
    pub focus: Control,
    pub duration_input: String,
    pub start_time_input: String,
    pub notice: Option<Notice>,
}

impl UiState for ControlsState {}

impl ControlsState {
    /// Text buffer of a form field, `None` for buttons.
    pub fn field_text(&self, control: Control) -> Option<&str> {
        match control {
            Control::Duration => Some(&self.duration_input),
            Control::StartTime => Some(&self.start_time_input),
            _ => None,
        }
    }
}
