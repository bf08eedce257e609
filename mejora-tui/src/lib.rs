// Library interface for mejora (for testing purposes)
pub mod api;
pub mod app;
pub mod config;

#[macro_use]
pub mod logging;

pub mod terminal;
pub mod ui;
