//! Library entry for ghostcfg exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod ghostty;
pub mod options;
pub mod preview;
pub mod schema;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
