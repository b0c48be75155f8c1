//! Plain-text and JSON output for the one-shot subcommands.

use anyhow::Result;
use hueforge_engine::{Color, ColorFormat, HarmonyType, format_color_value, is_color_light};
use serde::Serialize;

/// A color plus its rendering in the requested format.
#[derive(Debug, Serialize)]
pub struct ColorReport<'a> {
    #[serde(flatten)]
    pub color: &'a Color,
    pub value: String,
    pub light: bool,
}

impl<'a> ColorReport<'a> {
    pub fn new(color: &'a Color, format: ColorFormat) -> Self {
        Self {
            color,
            value: format_color_value(color, format),
            light: is_color_light(color),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaletteReport<'a> {
    pub base: &'a str,
    pub harmony: HarmonyType,
    pub format: ColorFormat,
    pub colors: Vec<ColorReport<'a>>,
}

impl<'a> PaletteReport<'a> {
    /// `palette[0]` is the base color.
    pub fn new(palette: &'a [Color], harmony: HarmonyType, format: ColorFormat) -> Self {
        Self {
            base: palette.first().map(Color::hex).unwrap_or_default(),
            harmony,
            format,
            colors: palette.iter().map(|color| ColorReport::new(color, format)).collect(),
        }
    }
}

/// One formatted value per line.
pub fn palette_text(palette: &[Color], format: ColorFormat) -> String {
    palette
        .iter()
        .map(|color| format_color_value(color, format))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every representation of one color, one per line.
pub fn conversion_text(color: &Color) -> String {
    let tone = if is_color_light(color) { "light" } else { "dark" };
    [
        format!("hex   {}", format_color_value(color, ColorFormat::Hex)),
        format!("rgb   {}", format_color_value(color, ColorFormat::Rgb)),
        format!("hsl   {}", format_color_value(color, ColorFormat::Hsl)),
        format!("tone  {tone}"),
    ]
    .join("\n")
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
