//! Countdown core.
//!
//! The countdown follows the MVI layout used across the crate:
//! - `state.rs` - `TimerState` snapshot and its derived `CountdownPhase`
//! - `intent.rs` - typed actions (the "slice" style)
//! - `raw.rs` - string-typed action envelopes and their creators (the
//!   plain reducer/store style)
//! - `reducer.rs` - the transition table
//! - `selectors.rs` - derived values read by the view
//! - `input.rs` - validation of user-supplied configuration

pub mod input;
mod intent;
pub mod raw;
mod reducer;
pub mod selectors;
mod state;

pub use intent::TimerIntent;
pub use raw::RawAction;
pub use reducer::TimerReducer;
pub use state::{CountdownPhase, TimerState, DEFAULT_DURATION_MS, DEFAULT_START_TIME};
