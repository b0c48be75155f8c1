//! The [`Color`] value type and its constructors.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::convert::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use crate::error::ColorError;

/// Largest value produced by [`random_color`], i.e. `#ffffff`.
const MAX_HEX_VALUE: u32 = 0xFF_FFFF;

/// An immutable color carrying its hex, RGB and HSL representations.
///
/// The three representations are kept consistent by construction: every
/// constructor derives the missing forms from the one it was given. Derived
/// colors (harmonies, brightness adjustments) are always new values.
///
/// Deserialization goes through the same rules: `hex` is required and
/// re-parsed, and a stored `hsl` is kept only when it still maps to that hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRecord")]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Color {
    /// Build a color from a `#rrggbb` (or `rrggbb`) string, case-insensitive.
    ///
    /// The stored hex is normalized to lowercase with a leading `#`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColorFormat`] when the input is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let rgb = hex_to_rgb(hex)?;
        Ok(Self::from_rgb(rgb))
    }

    /// Build a color from an RGB triple; HSL is derived from it.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            name: None,
        }
    }

    /// Build a color from hue/saturation/lightness. Never fails.
    ///
    /// The hue wraps into `0..360` (negative values included) and saturation
    /// and lightness clamp into `0..=100` before RGB and hex are derived. The
    /// stored HSL is that normalized triple, not a re-derivation from RGB.
    pub fn from_hsl(h: i32, s: i32, l: i32) -> Self {
        Self::with_hue(h.rem_euclid(360) as u16, s, l)
    }

    /// Like [`Color::from_hsl`] but stores `hue` untouched, so variations of
    /// a base whose hue rounded to 360 keep reporting 360.
    pub(crate) fn with_hue(hue: u16, s: i32, l: i32) -> Self {
        let hsl = Hsl {
            h: hue,
            s: s.clamp(0, 100) as u8,
            l: l.clamp(0, 100) as u8,
        };
        let rgb = hsl_to_rgb(hsl);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl,
            name: None,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Optional human label. Generated colors never carry one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Serialized shape of a [`Color`]; `rgb` is always re-derived from `hex`.
#[derive(Deserialize)]
struct ColorRecord {
    hex: String,
    #[serde(default)]
    hsl: Option<Hsl>,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<ColorRecord> for Color {
    type Error = ColorError;

    fn try_from(record: ColorRecord) -> Result<Self, Self::Error> {
        let mut color = Color::from_hex(&record.hex)?;
        if let Some(hsl) = record.hsl.filter(|hsl| hsl.h <= 360 && hsl_to_rgb(*hsl) == color.rgb) {
            color.hsl = hsl;
        }
        color.name = record.name;
        Ok(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Draw a uniformly random color from `#000000..=#ffffff`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let value = rng.gen_range(0..=MAX_HEX_VALUE);
    let rgb = Rgb {
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    };
    Color::from_rgb(rgb)
}

/// Return a copy of `color` with its lightness shifted by `amount` percent.
///
/// The result keeps hue and saturation; lightness clamps to `0..=100`.
pub fn adjust_brightness(color: &Color, amount: i32) -> Color {
    let Hsl { h, s, l } = color.hsl;
    Color::from_hsl(i32::from(h), i32::from(s), i32::from(l) + amount)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn from_hex_derives_rgb_and_hsl() {
        let color = Color::from_hex("#3498DB").unwrap();
        assert_eq!(color.hex(), "#3498db");
        assert_eq!(color.rgb(), Rgb::new(52, 152, 219));
        assert_eq!(color.hsl(), Hsl::new(204, 70, 53));
        assert_eq!(color.name(), None);
    }

    #[test]
    fn from_hex_accepts_missing_hash() {
        assert_eq!(Color::from_hex("ff0000").unwrap().hex(), "#ff0000");
    }

    #[test]
    fn from_hex_propagates_invalid_format() {
        assert_eq!(
            Color::from_hex("xyz123"),
            Err(ColorError::InvalidColorFormat("xyz123".into()))
        );
    }

    #[test]
    fn from_hsl_keeps_requested_triple() {
        let color = Color::from_hsl(120, 100, 50);
        assert_eq!(color.hsl(), Hsl::new(120, 100, 50));
        assert_eq!(color.rgb(), Rgb::new(0, 255, 0));
        assert_eq!(color.hex(), "#00ff00");
    }

    #[test]
    fn from_hsl_normalizes_out_of_range_input() {
        assert_eq!(Color::from_hsl(400, 150, -5).hsl(), Hsl::new(40, 100, 0));
        assert_eq!(Color::from_hsl(-30, 50, 50).hsl(), Hsl::new(330, 50, 50));
        assert_eq!(Color::from_hsl(360, 100, 50).hsl().h, 0);
    }

    #[test]
    fn random_color_is_reproducible_with_seed() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(random_color(&mut first), random_color(&mut second));
        }
    }

    #[test]
    fn random_color_matches_hex_construction() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..64 {
            let color = random_color(&mut rng);
            assert_eq!(color.hex().len(), 7);
            assert_eq!(Color::from_hex(color.hex()).unwrap(), color);
        }
    }

    #[test]
    fn adjust_brightness_clamps_lightness() {
        let base = Color::from_hsl(210, 60, 50);
        assert_eq!(adjust_brightness(&base, 20).hsl(), Hsl::new(210, 60, 70));
        assert_eq!(adjust_brightness(&base, -80).hsl(), Hsl::new(210, 60, 0));
        assert_eq!(adjust_brightness(&base, 80).hsl(), Hsl::new(210, 60, 100));
        assert_eq!(adjust_brightness(&base, 80).hex(), "#ffffff");
        // the source color is untouched
        assert_eq!(base.hsl(), Hsl::new(210, 60, 50));
    }

    #[test]
    fn json_round_trip_keeps_constructed_hsl() {
        let lighter = adjust_brightness(&Color::from_hex("#3498db").unwrap(), 10);
        let json = serde_json::to_string(&lighter).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lighter);
    }

    #[test]
    fn deserializing_rederives_from_hex() {
        let color: Color = serde_json::from_str(r##"{"hex":"#FF0000","rgb":{"r":1,"g":2,"b":3},"hsl":{"h":90,"s":10,"l":10}}"##).unwrap();
        assert_eq!(color.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(color.hsl(), Hsl::new(0, 100, 50));

        let invalid = serde_json::from_str::<Color>(r#"{"hex":"xyz123"}"#);
        assert!(invalid.unwrap_err().to_string().contains("invalid hex color"));
    }

    #[test]
    fn display_prints_hex() {
        assert_eq!(Color::from_hsl(0, 100, 50).to_string(), "#ff0000");
    }
}
