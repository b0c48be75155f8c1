use ratatui::style::Color;

use super::{DraculaTheme, NordTheme, Theme, dracula, nord};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier accepted by `--theme`.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Short description rendered in the help modal.
    pub description: &'static str,
    /// Hex-style color chips summarizing the palette.
    pub swatch: ThemeSwatch,
    /// Alternate spellings that map back to this definition.
    pub aliases: &'static [&'static str],
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Minimal set of colors that summarize each palette.
#[derive(Clone, Copy, Debug)]
pub struct ThemeSwatch {
    pub background: Color,
    pub accent: Color,
    pub selection: Color,
}

/// Ordered list of available themes; the first entry is the default.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        description: "Vivid pink and cyan chrome that stays out of the way of bright palettes.",
        swatch: ThemeSwatch {
            background: dracula::BG,
            accent: dracula::PINK,
            selection: dracula::CURRENT_LINE,
        },
        aliases: &["dracula", "default", "dark"],
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        description: "Muted polar blues; easier on the eyes next to saturated swatches.",
        swatch: ThemeSwatch {
            background: nord::N0,
            accent: nord::F1,
            selection: nord::N3,
        },
        aliases: &["nord", "polar"],
        factory: || Box::new(NordTheme::new()),
    },
];

/// Find a theme by id or alias, ignoring case and `-`/`_` differences.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    THEME_DEFINITIONS
        .iter()
        .find(|definition| normalize(definition.id) == wanted || definition.aliases.iter().any(|alias| normalize(alias) == wanted))
}

pub fn default_theme() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Comma-separated theme ids, for messages about unknown names.
pub fn available_ids() -> String {
    THEME_DEFINITIONS.iter().map(|definition| definition.id).collect::<Vec<_>>().join(", ")
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['-', '_', ' '], "")
}
