//! # Hueforge TUI Library
//!
//! Interactive terminal front end for the hueforge palette generator, built
//! on Ratatui and crossterm.
//!
//! ## Key Features
//!
//! - Base color entry, format and harmony selectors, and a 3 to 8 color count
//! - Palette swatches with readable text and one-key (or click) copying
//! - An in-memory collection of saved palettes on its own tab
//! - Dracula and Nord themes for the surrounding chrome
//!
//! ## Architecture
//!
//! Components translate input into state changes on [`app::App`] and return
//! `Effect`s. The runtime applies navigation effects directly and hands the
//! rest to the command layer, which performs side effects (clipboard) and
//! reports back with `Msg`s.

mod app;
mod cmd;
pub mod config;
mod ui;

use anyhow::Result;

pub use config::{DEFAULT_COLORS, GeneratorConfig, MAX_COLORS, MIN_COLORS};

/// Runs the palette generator until the user quits.
///
/// # Errors
///
/// Terminal setup, input and drawing failures. The terminal is restored
/// before the error is returned.
pub async fn run(config: GeneratorConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
