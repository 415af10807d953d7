//! inputbox library exports for testing

pub mod core;
pub mod host;
pub mod tui;
