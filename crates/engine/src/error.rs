use thiserror::Error;

/// Error surfaced when a color cannot be built from user-provided text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not exactly six hex digits with an optional leading `#`.
    #[error("invalid hex color: {0}")]
    InvalidColorFormat(String),
}

/// Returned when a harmony name does not match any known rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony type '{0}'; expected analogous, complementary, triadic, tetradic, monochromatic or random")]
pub struct ParseHarmonyError(pub String);

/// Returned when a format name is not one of hex, rgb or hsl.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color format '{0}'; expected hex, rgb or hsl")]
pub struct ParseFormatError(pub String);
