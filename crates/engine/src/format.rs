//! Display formatting and light/dark classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ParseFormatError;

/// Text representation used when displaying or copying a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    /// Every format in selector order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    /// Canonical lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
        }
    }

    /// Label shown in selectors.
    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hsl => "HSL",
        }
    }

    /// Parse a format name, falling back to [`ColorFormat::Hex`] for
    /// anything unrecognized.
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Render a color in the requested format.
///
/// - `Hex`: the stored `#rrggbb`
/// - `Rgb`: `rgb(r, g, b)`
/// - `Hsl`: `hsl(h, s%, l%)`
pub fn format_color_value(color: &Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => color.hex().to_string(),
        ColorFormat::Rgb => {
            let rgb = color.rgb();
            format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
        }
        ColorFormat::Hsl => {
            let hsl = color.hsl();
            format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
        }
    }
}

/// Whether dark text reads better than light text on top of `color`.
///
/// Uses the YIQ luma approximation `(299r + 587g + 114b) / 1000 >= 128`.
pub fn is_color_light(color: &Color) -> bool {
    let rgb = color.rgb();
    let weighted = u32::from(rgb.r) * 299 + u32::from(rgb.g) * 587 + u32::from(rgb.b) * 114;
    weighted >= 128 * 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_red_in_every_format() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(format_color_value(&red, ColorFormat::Hex), "#ff0000");
        assert_eq!(format_color_value(&red, ColorFormat::Rgb), "rgb(255, 0, 0)");
        assert_eq!(format_color_value(&red, ColorFormat::Hsl), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn unknown_format_names_fall_back_to_hex() {
        assert_eq!(ColorFormat::from_name_lenient("cmyk"), ColorFormat::Hex);
        assert_eq!(ColorFormat::from_name_lenient("RGB"), ColorFormat::Rgb);
        assert!("cmyk".parse::<ColorFormat>().is_err());
    }

    #[test]
    fn white_is_light_and_black_is_dark() {
        assert!(is_color_light(&Color::from_hex("#FFFFFF").unwrap()));
        assert!(!is_color_light(&Color::from_hex("#000000").unwrap()));
    }

    #[test]
    fn light_threshold_is_inclusive() {
        // 128 * 1000 / (299 + 587 + 114) = 128 exactly for a neutral gray
        assert!(is_color_light(&Color::from_hex("#808080").unwrap()));
        assert!(!is_color_light(&Color::from_hex("#7f7f7f").unwrap()));
        // saturated yellow is light, saturated blue is dark
        assert!(is_color_light(&Color::from_hex("#ffff00").unwrap()));
        assert!(!is_color_light(&Color::from_hex("#0000ff").unwrap()));
    }
}
