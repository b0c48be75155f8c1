//! Startup configuration for the interactive generator.

use hueforge_engine::{ColorFormat, HarmonyType};
use rand::{SeedableRng, rngs::StdRng};

/// Smallest palette the generator offers.
pub const MIN_COLORS: usize = 3;
/// Largest palette the generator offers.
pub const MAX_COLORS: usize = 8;
/// Palette size used when nothing else is requested.
pub const DEFAULT_COLORS: usize = 5;

/// Options collected by the CLI and handed to [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Initial base color as hex text; `None` (or an invalid value) picks a random base
    pub base: Option<String>,
    pub harmony: HarmonyType,
    /// Requested palette size, clamped to `MIN_COLORS..=MAX_COLORS` on use
    pub count: usize,
    pub format: ColorFormat,
    /// Seed for the random number generator; entropy when absent
    pub seed: Option<u64>,
    /// Theme id or alias from the theme catalog
    pub theme: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base: None,
            harmony: HarmonyType::default(),
            count: DEFAULT_COLORS,
            format: ColorFormat::default(),
            seed: None,
            theme: None,
        }
    }
}

impl GeneratorConfig {
    /// Build the generator's random number generator.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
