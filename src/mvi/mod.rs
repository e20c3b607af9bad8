//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable state in the crate (the countdown itself and the
//! view's control panel) flows through these traits.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every transition
//! - **Intent**: User actions or scheduler events
//! - **Reducer**: Pure function that maps `(State, Intent)` to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
