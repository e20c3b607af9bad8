//! Validation of user-supplied countdown configuration.
//!
//! Form fields deliver free-form text. Parsing is strict: surrounding
//! whitespace is ignored, anything that is not a whole number is rejected,
//! and an empty field is rejected rather than read as zero.

use crate::error::{TimerError, TimerField};

pub fn validate_duration(duration: u64) -> Result<u64, TimerError> {
    if duration == 0 {
        return Err(TimerError::invalid(TimerField::Duration, "0"));
    }
    Ok(duration)
}

pub fn validate_start_time(start_time: i64) -> Result<i64, TimerError> {
    if start_time < 0 {
        return Err(TimerError::invalid(
            TimerField::StartTime,
            start_time.to_string(),
        ));
    }
    Ok(start_time)
}

/// Parse a tick interval in milliseconds.
pub fn parse_duration(text: &str) -> Result<u64, TimerError> {
    let trimmed = text.trim();
    let duration = trimmed
        .parse::<u64>()
        .map_err(|_| TimerError::invalid(TimerField::Duration, trimmed))?;
    validate_duration(duration)
}

/// Parse a countdown origin in seconds.
pub fn parse_start_time(text: &str) -> Result<i64, TimerError> {
    let trimmed = text.trim();
    let start_time = trimmed
        .parse::<i64>()
        .map_err(|_| TimerError::invalid(TimerField::StartTime, trimmed))?;
    validate_start_time(start_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_duration("500"), Ok(500));
        assert_eq!(parse_duration(" 1000 "), Ok(1000));
        assert_eq!(parse_start_time("0"), Ok(0));
        assert_eq!(parse_start_time("42"), Ok(42));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(parse_duration("fast").is_err());
        assert!(parse_duration("1.5").is_err());
        assert!(parse_start_time("ten").is_err());
    }

    #[test]
    fn rejects_empty_field() {
        assert!(parse_duration("").is_err());
        assert!(parse_start_time("   ").is_err());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-5").is_err());
        assert!(parse_start_time("-1").is_err());
    }

    #[test]
    fn error_carries_trimmed_text() {
        let err = parse_start_time("  abc ").unwrap_err();
        assert_eq!(
            err,
            TimerError::invalid(TimerField::StartTime, "abc")
        );
    }
}
