pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod logging;
pub mod transport;
pub mod tui;
pub mod ui;
pub mod widget;
