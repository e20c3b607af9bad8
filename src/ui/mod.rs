//! Terminal view of the countdown.

pub mod app;
pub mod controls;
pub mod dial;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod panel;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
