pub mod config;
pub mod model;
pub mod schedule;

#[cfg(feature = "tui")]
pub mod tui;
