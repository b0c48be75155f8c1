//! Palette generation from a base color and a harmony rule.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::{Color, random_color};
use crate::error::ParseHarmonyError;

const ANALOGOUS_STEP: i32 = 30;
const MONOCHROMATIC_STEP: i32 = 10;
/// Darkened or desaturated variations never drop below this percentage.
const VARIATION_FLOOR: i32 = 10;
const MONOCHROMATIC_CEILING: i32 = 90;

/// Named rule for deriving related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyType {
    #[default]
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
    Monochromatic,
    Random,
}

impl HarmonyType {
    /// Every harmony in selector order.
    pub const ALL: [HarmonyType; 6] = [
        HarmonyType::Analogous,
        HarmonyType::Complementary,
        HarmonyType::Triadic,
        HarmonyType::Tetradic,
        HarmonyType::Monochromatic,
        HarmonyType::Random,
    ];

    /// Canonical lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyType::Analogous => "analogous",
            HarmonyType::Complementary => "complementary",
            HarmonyType::Triadic => "triadic",
            HarmonyType::Tetradic => "tetradic",
            HarmonyType::Monochromatic => "monochromatic",
            HarmonyType::Random => "random",
        }
    }

    /// Label shown in selectors.
    pub fn label(self) -> &'static str {
        match self {
            HarmonyType::Analogous => "Analogous",
            HarmonyType::Complementary => "Complementary",
            HarmonyType::Triadic => "Triadic",
            HarmonyType::Tetradic => "Tetradic",
            HarmonyType::Monochromatic => "Monochromatic",
            HarmonyType::Random => "Random",
        }
    }

    /// Parse a harmony name; unrecognized names select [`HarmonyType::Random`].
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!(name, "unknown harmony type, using random");
            HarmonyType::Random
        })
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyType {
    type Err = ParseHarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        HarmonyType::ALL
            .into_iter()
            .find(|harmony| harmony.as_str() == normalized)
            .ok_or_else(|| ParseHarmonyError(s.to_string()))
    }
}

/// Generate a palette of exactly `count` colors starting with `base`.
///
/// Each rule appends its own colors derived from the base HSL. Rules that
/// produce fewer than `count` colors are padded with random colors, and
/// rules that produce more are truncated, which can drop their trailing
/// variations for small counts. A `count` of zero yields an empty palette.
///
/// Randomness (the `Random` rule and padding) is drawn from `rng` only.
pub fn generate_harmony<R: Rng + ?Sized>(base: &Color, harmony: HarmonyType, count: usize, rng: &mut R) -> Vec<Color> {
    let mut palette = Vec::with_capacity(count.max(5));
    palette.push(base.clone());

    let hsl = base.hsl();
    let (h, s, l) = (i32::from(hsl.h), i32::from(hsl.s), i32::from(hsl.l));
    let hue = |offset: i32| (h + offset).rem_euclid(360);
    let same_hue = |s: i32, l: i32| Color::with_hue(hsl.h, s, l);
    // Number of colors the open-ended rules append after the base.
    let extra = count.saturating_sub(1);

    match harmony {
        HarmonyType::Complementary => {
            palette.push(Color::from_hsl(hue(180), s, l));
            if count > 2 {
                palette.push(Color::from_hsl(hue(180), s, (l - 20).max(VARIATION_FLOOR)));
                palette.push(same_hue(s, (l - 20).max(VARIATION_FLOOR)));
                palette.push(same_hue((s - 15).max(VARIATION_FLOOR), l));
            }
        }
        HarmonyType::Analogous => {
            // The hue cycle repeats every 12 steps.
            palette.extend((1..=extra).map(|i| Color::from_hsl(hue((i % 12) as i32 * ANALOGOUS_STEP), s, l)));
        }
        HarmonyType::Triadic => {
            palette.push(Color::from_hsl(hue(120), s, l));
            palette.push(Color::from_hsl(hue(240), s, l));
            if count > 3 {
                palette.push(same_hue((s + 10).min(100), (l - 15).max(VARIATION_FLOOR)));
                palette.push(Color::from_hsl(hue(60), s, l));
            }
        }
        HarmonyType::Tetradic => {
            palette.push(Color::from_hsl(hue(90), s, l));
            palette.push(Color::from_hsl(hue(180), s, l));
            palette.push(Color::from_hsl(hue(270), s, l));
            if count > 4 {
                palette.push(same_hue((s + 15).min(100), (l - 10).max(VARIATION_FLOOR)));
            }
        }
        HarmonyType::Monochromatic => {
            palette.extend((1..=extra).map(|i| {
                // Past 20 steps the lightness is pinned at the ceiling.
                let step = i.min(20) as i32;
                let lightness = (l - 20 + step * MONOCHROMATIC_STEP).clamp(VARIATION_FLOOR, MONOCHROMATIC_CEILING);
                same_hue(s, lightness)
            }));
        }
        HarmonyType::Random => {
            palette.extend((0..extra).map(|_| random_color(rng)));
        }
    }

    if palette.len() < count {
        trace!(missing = count - palette.len(), %harmony, "padding palette with random colors");
    }
    while palette.len() < count {
        palette.push(random_color(rng));
    }
    palette.truncate(count);
    palette
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::convert::Hsl;

    fn base() -> Color {
        Color::from_hex("#3498db").unwrap()
    }

    fn hsl_of(palette: &[Color]) -> Vec<Hsl> {
        palette.iter().map(Color::hsl).collect()
    }

    #[test]
    fn every_rule_returns_exact_count_with_base_first() {
        let base = base();
        let mut rng = StdRng::seed_from_u64(11);
        for harmony in HarmonyType::ALL {
            for count in 1..=10 {
                let palette = generate_harmony(&base, harmony, count, &mut rng);
                assert_eq!(palette.len(), count, "{harmony} with count {count}");
                assert_eq!(palette[0], base, "{harmony} with count {count}");
            }
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        for harmony in HarmonyType::ALL {
            assert!(generate_harmony(&base(), harmony, 0, &mut rng).is_empty());
        }
    }

    #[test]
    fn complementary_with_variations() {
        let mut rng = StdRng::seed_from_u64(0);
        let palette = generate_harmony(&base(), HarmonyType::Complementary, 5, &mut rng);
        assert_eq!(
            hsl_of(&palette),
            vec![
                Hsl::new(204, 70, 53),
                Hsl::new(24, 70, 53),
                Hsl::new(24, 70, 33),
                Hsl::new(204, 70, 33),
                Hsl::new(204, 55, 53),
            ]
        );
    }

    #[test]
    fn complementary_pair_skips_variations() {
        let mut rng = StdRng::seed_from_u64(0);
        let palette = generate_harmony(&base(), HarmonyType::Complementary, 2, &mut rng);
        assert_eq!(hsl_of(&palette), vec![Hsl::new(204, 70, 53), Hsl::new(24, 70, 53)]);
    }

    #[test]
    fn complementary_three_truncates_variations() {
        let mut rng = StdRng::seed_from_u64(0);
        let palette = generate_harmony(&base(), HarmonyType::Complementary, 3, &mut rng);
        assert_eq!(
            hsl_of(&palette),
            vec![Hsl::new(204, 70, 53), Hsl::new(24, 70, 53), Hsl::new(24, 70, 33)]
        );
    }

    #[test]
    fn analogous_steps_thirty_degrees_and_wraps() {
        let mut rng = StdRng::seed_from_u64(0);
        let palette = generate_harmony(&base(), HarmonyType::Analogous, 8, &mut rng);
        let hues: Vec<u16> = palette.iter().map(|color| color.hsl().h).collect();
        assert_eq!(hues, vec![204, 234, 264, 294, 324, 354, 24, 54]);
        assert!(palette.iter().all(|color| color.hsl().s == 70 && color.hsl().l == 53));
    }

    #[test]
    fn triadic_adds_variations_above_three() {
        let mut rng = StdRng::seed_from_u64(0);
        let three = generate_harmony(&base(), HarmonyType::Triadic, 3, &mut rng);
        assert_eq!(
            hsl_of(&three),
            vec![Hsl::new(204, 70, 53), Hsl::new(324, 70, 53), Hsl::new(84, 70, 53)]
        );

        let five = generate_harmony(&base(), HarmonyType::Triadic, 5, &mut rng);
        assert_eq!(five[3].hsl(), Hsl::new(204, 80, 38));
        assert_eq!(five[4].hsl(), Hsl::new(264, 70, 53));
    }

    #[test]
    fn tetradic_truncates_for_small_counts() {
        let mut rng = StdRng::seed_from_u64(0);
        let three = generate_harmony(&base(), HarmonyType::Tetradic, 3, &mut rng);
        assert_eq!(
            hsl_of(&three),
            vec![Hsl::new(204, 70, 53), Hsl::new(294, 70, 53), Hsl::new(24, 70, 53)]
        );

        let five = generate_harmony(&base(), HarmonyType::Tetradic, 5, &mut rng);
        assert_eq!(five[3].hsl(), Hsl::new(114, 70, 53));
        assert_eq!(five[4].hsl(), Hsl::new(204, 85, 43));
    }

    #[test]
    fn monochromatic_clamps_lightness() {
        let mut rng = StdRng::seed_from_u64(0);
        let palette = generate_harmony(&base(), HarmonyType::Monochromatic, 8, &mut rng);
        let lightness: Vec<u8> = palette.iter().map(|color| color.hsl().l).collect();
        assert_eq!(lightness, vec![53, 43, 53, 63, 73, 83, 90, 90]);
        assert!(palette.iter().all(|color| color.hsl().h == 204 && color.hsl().s == 70));

        let dark = Color::from_hsl(10, 40, 5);
        let palette = generate_harmony(&dark, HarmonyType::Monochromatic, 3, &mut rng);
        assert_eq!(palette[1].hsl().l, 10);
        assert_eq!(palette[2].hsl().l, 10);
    }

    #[test]
    fn analogous_cycle_repeats_every_twelve_steps() {
        let mut rng = StdRng::seed_from_u64(0);
        let palette = generate_harmony(&base(), HarmonyType::Analogous, 14, &mut rng);
        assert_eq!(palette[12].hsl(), base().hsl());
        assert_eq!(palette[13].hsl().h, 234);
    }

    #[test]
    fn long_monochromatic_stays_at_ceiling() {
        let mut rng = StdRng::seed_from_u64(0);
        let palette = generate_harmony(&base(), HarmonyType::Monochromatic, 40, &mut rng);
        assert_eq!(palette.len(), 40);
        assert!(palette[7..].iter().all(|color| color.hsl().l == 90));
    }

    #[test]
    fn same_hue_variations_keep_hue_360() {
        let mut rng = StdRng::seed_from_u64(0);
        let base = Color::from_hex("#ff0001").unwrap();
        assert_eq!(base.hsl(), Hsl::new(360, 100, 50));

        let mono = generate_harmony(&base, HarmonyType::Monochromatic, 3, &mut rng);
        assert_eq!(hsl_of(&mono), vec![Hsl::new(360, 100, 50), Hsl::new(360, 100, 40), Hsl::new(360, 100, 50)]);
        assert_eq!(mono[1].rgb(), Color::from_hsl(0, 100, 40).rgb());

        let complementary = generate_harmony(&base, HarmonyType::Complementary, 5, &mut rng);
        assert_eq!(complementary[1].hsl().h, 180);
        assert_eq!(complementary[3].hsl(), Hsl::new(360, 100, 30));
        assert_eq!(complementary[4].hsl(), Hsl::new(360, 85, 50));
    }

    #[test]
    fn variations_respect_floor() {
        let mut rng = StdRng::seed_from_u64(0);
        let dim = Color::from_hsl(0, 12, 15);
        let palette = generate_harmony(&dim, HarmonyType::Complementary, 5, &mut rng);
        assert_eq!(palette[2].hsl().l, 10);
        assert_eq!(palette[3].hsl().l, 10);
        assert_eq!(palette[4].hsl().s, 10);
    }

    #[test]
    fn random_and_padding_are_seed_reproducible() {
        let base = base();
        for harmony in [HarmonyType::Random, HarmonyType::Complementary, HarmonyType::Triadic, HarmonyType::Tetradic] {
            let first = generate_harmony(&base, harmony, 8, &mut StdRng::seed_from_u64(99));
            let second = generate_harmony(&base, harmony, 8, &mut StdRng::seed_from_u64(99));
            assert_eq!(first, second, "{harmony}");
        }
    }

    #[test]
    fn padding_follows_rule_colors() {
        let base = base();
        let mut expected_rng = StdRng::seed_from_u64(5);
        let pad_a = random_color(&mut expected_rng);
        let pad_b = random_color(&mut expected_rng);

        let palette = generate_harmony(&base, HarmonyType::Tetradic, 7, &mut StdRng::seed_from_u64(5));
        assert_eq!(palette[5], pad_a);
        assert_eq!(palette[6], pad_b);
    }

    #[test]
    fn parses_harmony_names() {
        assert_eq!("Triadic".parse::<HarmonyType>(), Ok(HarmonyType::Triadic));
        assert_eq!(
            "split".parse::<HarmonyType>(),
            Err(ParseHarmonyError("split".to_string()))
        );
        assert_eq!(HarmonyType::from_name_lenient("split"), HarmonyType::Random);
        assert_eq!(HarmonyType::from_name_lenient("tetradic"), HarmonyType::Tetradic);
    }
}
