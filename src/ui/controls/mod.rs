//! Control panel feature module.
//!
//! Tracks the view-local part of the screen: which control has focus, the
//! text typed into the two configuration forms, and the last notice shown to
//! the user. The countdown itself lives in the store; this module never
//! touches it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Focus, field buffers, notice
//! - `intent.rs` - Key-driven edits and submission feedback
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ControlsIntent;
pub use reducer::ControlsReducer;
pub use state::{Control, ControlsState, Notice};
