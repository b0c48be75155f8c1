mod saved_component;
pub mod state;

pub use saved_component::SavedComponent;
pub use state::SavedViewState;
