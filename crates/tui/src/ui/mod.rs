//! UI layer: routed views, the help modal, theming and the event loop.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
pub mod widgets;
