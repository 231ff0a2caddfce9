//! cafe-menu: browse a café menu, filter by category, mark favorites.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod menu;
pub mod report;
pub mod tui;
pub mod types;
