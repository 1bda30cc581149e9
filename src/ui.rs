//! Ratatui front-end: a catalog list and a detail page, driven by the
//! router and drawn into a crossterm terminal.

mod app;
mod helpers;
mod screens;
mod terminal;

pub use app::{App, ViewEvent};
pub use terminal::run_app;
