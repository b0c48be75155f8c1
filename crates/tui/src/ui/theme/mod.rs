//! Theme styling module for the TUI UI layer.
//!
//! Defines the Dracula and Nord palettes, the semantic theme roles they fill
//! in, and helper builders for Ratatui widgets. Generated palette colors are
//! never themed; only the surrounding chrome is.

use tracing::warn;

pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

/// Selects the preferred theme, falling back to the default when the name is
/// unknown.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if let Some(name) = preferred_theme {
        match catalog::resolve(name) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => warn!(theme = name, available = %catalog::available_ids(), "unknown theme; using the default"),
        }
    }

    LoadedTheme::from_definition(catalog::default_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(load(Some("mystery")).definition.id, "dracula");
        assert_eq!(load(None).definition.id, "dracula");
        assert_eq!(load(Some("nord")).definition.id, "nord");
    }
}
