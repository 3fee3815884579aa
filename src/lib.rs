pub mod config;
pub mod core;
pub mod logging;
pub mod tui;
pub mod ui;
