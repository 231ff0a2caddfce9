//! Interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Browser, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
