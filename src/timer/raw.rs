//! String-typed action envelopes.
//!
//! The plain reducer/store style passes actions around as `{ type, payload }`
//! records built by small creator functions. Envelopes are decoded into
//! [`TimerIntent`] at the store boundary; anything that does not decode is an
//! unknown action and is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::intent::TimerIntent;

pub const RESET: &str = "timer/reset";
pub const START: &str = "timer/start";
pub const STOP: &str = "timer/stop";
pub const TICK: &str = "timer/tickTimer";
pub const SET_DURATION: &str = "timer/setDuration";
pub const SET_START_TIME: &str = "timer/setStartTime";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

#[derive(Deserialize)]
struct DurationPayload {
    duration: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartTimePayload {
    start_time: i64,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Decode into a typed intent.
    ///
    /// Returns `None` for unknown types and for payloads of the wrong shape.
    pub fn decode(&self) -> Option<TimerIntent> {
        match self.kind.as_str() {
            RESET => Some(TimerIntent::Reset),
            START => Some(TimerIntent::Start),
            STOP => Some(TimerIntent::Stop),
            TICK => Some(TimerIntent::Tick),
            SET_DURATION => serde_json::from_value::<DurationPayload>(self.payload.clone())
                .ok()
                .map(|p| TimerIntent::SetDuration {
                    duration: p.duration,
                }),
            SET_START_TIME => serde_json::from_value::<StartTimePayload>(self.payload.clone())
                .ok()
                .map(|p| TimerIntent::SetStartTime {
                    start_time: p.start_time,
                }),
            _ => None,
        }
    }
}

impl From<TimerIntent> for RawAction {
    fn from(intent: TimerIntent) -> Self {
        match intent {
            TimerIntent::Reset => reset(),
            TimerIntent::Start => start(),
            TimerIntent::Stop => stop(),
            TimerIntent::Tick => tick_timer(),
            TimerIntent::SetDuration { duration } => set_duration(duration),
            TimerIntent::SetStartTime { start_time } => set_start_time(start_time),
        }
    }
}

pub fn reset() -> RawAction {
    RawAction::new(RESET)
}

pub fn start() -> RawAction {
    RawAction::new(START)
}

pub fn stop() -> RawAction {
    RawAction::new(STOP)
}

pub fn tick_timer() -> RawAction {
    RawAction::new(TICK)
}

pub fn set_duration(duration: u64) -> RawAction {
    RawAction::with_payload(SET_DURATION, json!({ "duration": duration }))
}

pub fn set_start_time(start_time: i64) -> RawAction {
    RawAction::with_payload(SET_START_TIME, json!({ "startTime": start_time }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creators_decode_to_matching_intents() {
        assert_eq!(reset().decode(), Some(TimerIntent::Reset));
        assert_eq!(tick_timer().decode(), Some(TimerIntent::Tick));
        assert_eq!(
            set_duration(500).decode(),
            Some(TimerIntent::SetDuration { duration: 500 })
        );
        assert_eq!(
            set_start_time(5).decode(),
            Some(TimerIntent::SetStartTime { start_time: 5 })
        );
    }

    #[test]
    fn unknown_type_decodes_to_none() {
        assert_eq!(RawAction::new("timer/explode").decode(), None);
        assert_eq!(RawAction::new("counter/start").decode(), None);
    }

    #[test]
    fn malformed_payload_decodes_to_none() {
        let action = RawAction::with_payload(SET_DURATION, json!({ "duration": "fast" }));
        assert_eq!(action.decode(), None);

        let action = RawAction::new(SET_START_TIME);
        assert_eq!(action.decode(), None);
    }

    #[test]
    fn envelope_wire_shape() {
        let json = serde_json::to_value(set_start_time(7)).unwrap();
        assert_eq!(
            json,
            json!({ "type": "timer/setStartTime", "payload": { "startTime": 7 } })
        );

        let json = serde_json::to_value(start()).unwrap();
        assert_eq!(json, json!({ "type": "timer/start" }));

        let parsed: RawAction = serde_json::from_str(r#"{"type":"timer/stop"}"#).unwrap();
        assert_eq!(parsed.decode(), Some(TimerIntent::Stop));
    }
}
