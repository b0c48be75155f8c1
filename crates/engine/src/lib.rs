//! # Hueforge Engine
//!
//! Pure color math behind the hueforge palette generator: hex/RGB/HSL
//! conversion, color construction, harmony-based palette generation,
//! perceived-brightness classification and display formatting.
//!
//! ## Key Features
//!
//! - **Conversions**: `hex_to_rgb`, `rgb_to_hex`, `rgb_to_hsl`, `hsl_to_rgb`
//! - **Construction**: [`Color::from_hex`], [`Color::from_hsl`], [`random_color`]
//! - **Harmonies**: [`generate_harmony`] for the six [`HarmonyType`] rules
//! - **Presentation**: [`format_color_value`] and [`is_color_light`]
//!
//! Every function is free of side effects. The only nondeterminism is the
//! random number generator that callers pass to [`random_color`] and
//! [`generate_harmony`]; a seeded generator makes both reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use hueforge_engine::{Color, ColorFormat, HarmonyType, format_color_value, generate_harmony};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let base = Color::from_hex("#3498db")?;
//! let mut rng = StdRng::seed_from_u64(7);
//! let palette = generate_harmony(&base, HarmonyType::Triadic, 5, &mut rng);
//! assert_eq!(palette.len(), 5);
//! assert_eq!(format_color_value(&palette[0], ColorFormat::Rgb), "rgb(52, 152, 219)");
//! # Ok::<(), hueforge_engine::ColorError>(())
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod format;
pub mod harmony;

pub use color::{Color, adjust_brightness, random_color};
pub use convert::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{ColorError, ParseFormatError, ParseHarmonyError};
pub use format::{ColorFormat, format_color_value, is_color_light};
pub use harmony::{HarmonyType, generate_harmony};
