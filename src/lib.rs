//! guide-drawer - contextual detail drawers for a rules-reference TUI
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod drawer;
pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
