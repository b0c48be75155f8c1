//! UI components: the two routed views, the help modal and shared pieces.

pub mod common;
pub mod component;
pub mod generator;
pub mod help;
pub mod saved;

pub(crate) use component::Component;
pub use generator::GeneratorComponent;
pub use help::HelpComponent;
pub use saved::SavedComponent;
