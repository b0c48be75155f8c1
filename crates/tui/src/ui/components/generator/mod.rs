mod generator_component;
pub mod state;

pub use generator_component::GeneratorComponent;
pub use state::{GeneratorFocus, GeneratorState, SavedPalette};
