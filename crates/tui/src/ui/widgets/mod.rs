//! Small, stateless UI widgets used across components.

pub mod swatch;

pub use swatch::{Swatch, terminal_color};
