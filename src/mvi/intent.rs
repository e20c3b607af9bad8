//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, form submissions)
/// - System events (scheduler ticks)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
