use thiserror::Error;

/// Configuration fields that accept user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerField {
    Duration,
    StartTime,
}

impl TimerField {
    pub fn label(self) -> &'static str {
        match self {
            TimerField::Duration => "Duration",
            TimerField::StartTime => "Start time",
        }
    }
}

impl std::fmt::Display for TimerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors surfaced by the countdown core.
///
/// Unknown actions and stale scheduler fires are not errors; they are
/// dropped where they are detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("{field} must be {expected}, got '{value}'")]
    InvalidConfiguration {
        field: TimerField,
        value: String,
        expected: &'static str,
    },
}

impl TimerError {
    pub fn invalid(field: TimerField, value: impl Into<String>) -> Self {
        let expected = match field {
            TimerField::Duration => "a positive number of milliseconds",
            TimerField::StartTime => "a non-negative number of seconds",
        };
        TimerError::InvalidConfiguration {
            field,
            value: value.into(),
            expected,
        }
    }

    pub fn field(&self) -> TimerField {
        match self {
            TimerError::InvalidConfiguration { field, .. } => *field,
        }
    }
}
