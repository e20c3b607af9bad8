//! Terminal countdown timer built on a reducer/store core.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod scheduler;
pub mod shutdown;
pub mod store;
pub mod timer;
pub mod ui;
