//! State behind the "Generate Palette" view.
//!
//! Every change goes through a transition method that calls the color engine;
//! the view only reads.

use std::time::Instant;

use hueforge_engine::{Color, ColorFormat, HarmonyType, format_color_value, generate_harmony, random_color};
use hueforge_types::TOAST_DURATION;
use rand::rngs::StdRng;
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::config::{GeneratorConfig, MAX_COLORS, MIN_COLORS};
use crate::ui::components::common::TextInputState;

/// Controls on the generator view, in `Tab` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorFocus {
    #[default]
    BaseColor,
    Format,
    Harmony,
    Count,
    Swatches,
}

impl GeneratorFocus {
    const ORDER: [GeneratorFocus; 5] = [
        GeneratorFocus::BaseColor,
        GeneratorFocus::Format,
        GeneratorFocus::Harmony,
        GeneratorFocus::Count,
        GeneratorFocus::Swatches,
    ];

    fn cycle(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|focus| *focus == self).unwrap_or(0);
        let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
        Self::ORDER[next]
    }
}

/// A palette frozen at the moment it was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPalette {
    /// 1-based position in the saved list
    pub ordinal: usize,
    pub colors: Vec<Color>,
}

#[derive(Debug, Clone, Copy)]
struct CopiedSwatch {
    index: usize,
    at: Instant,
}

#[derive(Debug)]
pub struct GeneratorState {
    base_color: Color,
    hex_input: TextInputState,
    format: ColorFormat,
    harmony: HarmonyType,
    count: usize,
    palette: Vec<Color>,
    saved: Vec<SavedPalette>,
    selected_swatch: usize,
    focus: GeneratorFocus,
    copied: Option<CopiedSwatch>,
    /// Screen areas of the swatches from the last render, for mouse hits
    swatch_areas: Vec<Rect>,
    rng: StdRng,
}

impl GeneratorState {
    pub fn new(config: &GeneratorConfig, mut rng: StdRng) -> Self {
        let configured = config.base.as_deref().and_then(|hex| match Color::from_hex(hex) {
            Ok(color) => Some(color),
            Err(error) => {
                debug!(%error, "ignoring configured base color");
                None
            }
        });
        let base_color = configured.unwrap_or_else(|| random_color(&mut rng));
        let mut hex_input = TextInputState::new();
        hex_input.set_input(base_color.hex());

        let mut state = Self {
            base_color,
            hex_input,
            format: config.format,
            harmony: config.harmony,
            count: config.count.clamp(MIN_COLORS, MAX_COLORS),
            palette: Vec::new(),
            saved: Vec::new(),
            selected_swatch: 0,
            focus: GeneratorFocus::default(),
            copied: None,
            swatch_areas: Vec::new(),
            rng,
        };
        state.regenerate();
        state
    }

    pub fn base_color(&self) -> &Color {
        &self.base_color
    }
    pub fn hex_input(&self) -> &TextInputState {
        &self.hex_input
    }
    pub fn format(&self) -> ColorFormat {
        self.format
    }
    pub fn harmony(&self) -> HarmonyType {
        self.harmony
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
    pub fn saved(&self) -> &[SavedPalette] {
        &self.saved
    }
    pub fn selected_swatch(&self) -> usize {
        self.selected_swatch
    }
    pub fn focus(&self) -> GeneratorFocus {
        self.focus
    }

    /// Whether the entry currently holds a complete, parseable `#rrggbb` value.
    pub fn hex_input_is_valid(&self) -> bool {
        is_complete_hex(self.hex_input.input()) && Color::from_hex(self.hex_input.input()).is_ok()
    }

    /// Replace the entry text and apply it. Returns whether the base changed.
    #[cfg(test)]
    pub fn set_hex_input(&mut self, text: &str) -> bool {
        self.hex_input.set_input(text);
        self.apply_hex_input()
    }

    /// Edit the entry in place (typing, deleting) and apply the result.
    pub fn edit_hex_input(&mut self, edit: impl FnOnce(&mut TextInputState)) -> bool {
        edit(&mut self.hex_input);
        self.apply_hex_input()
    }

    /// Partial or malformed text is kept in the entry but never replaces the
    /// base color.
    fn apply_hex_input(&mut self) -> bool {
        let text = self.hex_input.input();
        if !is_complete_hex(text) {
            return false;
        }
        match Color::from_hex(text) {
            Ok(color) => {
                self.base_color = color;
                self.regenerate();
                true
            }
            Err(error) => {
                debug!(%error, "keeping previous base color");
                false
            }
        }
    }

    pub fn randomize_base(&mut self) {
        self.base_color = random_color(&mut self.rng);
        self.hex_input.set_input(self.base_color.hex());
        self.regenerate();
    }

    pub fn set_harmony(&mut self, harmony: HarmonyType) {
        self.harmony = harmony;
        self.regenerate();
    }

    pub fn cycle_harmony(&mut self, forward: bool) {
        let next = cycle_in(&HarmonyType::ALL, self.harmony, forward);
        self.set_harmony(next);
    }

    /// Palette size is clamped to `MIN_COLORS..=MAX_COLORS`.
    pub fn set_count(&mut self, count: usize) {
        self.count = count.clamp(MIN_COLORS, MAX_COLORS);
        self.regenerate();
    }

    pub fn adjust_count(&mut self, delta: i32) {
        let requested = (self.count as i64 + i64::from(delta)).max(0) as usize;
        self.set_count(requested);
    }

    /// Display format only; the palette itself is unchanged.
    pub fn set_format(&mut self, format: ColorFormat) {
        self.format = format;
    }

    pub fn cycle_format(&mut self, forward: bool) {
        self.set_format(cycle_in(&ColorFormat::ALL, self.format, forward));
    }

    pub fn regenerate(&mut self) {
        self.palette = generate_harmony(&self.base_color, self.harmony, self.count, &mut self.rng);
        self.selected_swatch = self.selected_swatch.min(self.palette.len().saturating_sub(1));
        self.copied = None;
        debug!(
            base = self.base_color.hex(),
            harmony = %self.harmony,
            count = self.count,
            "palette regenerated"
        );
    }

    /// Snapshot the current palette. Returns the number of saved palettes.
    pub fn save_palette(&mut self) -> usize {
        let ordinal = self.saved.len() + 1;
        self.saved.push(SavedPalette {
            ordinal,
            colors: self.palette.clone(),
        });
        debug!(ordinal, "palette saved");
        self.saved.len()
    }

    /// The selected swatch rendered in the active format, ready to copy.
    pub fn selected_value(&self) -> Option<String> {
        self.palette
            .get(self.selected_swatch)
            .map(|color| format_color_value(color, self.format))
    }

    pub fn select_next_swatch(&mut self) {
        if !self.palette.is_empty() {
            self.selected_swatch = (self.selected_swatch + 1) % self.palette.len();
        }
    }

    pub fn select_previous_swatch(&mut self) {
        let len = self.palette.len();
        if len > 0 {
            self.selected_swatch = (self.selected_swatch + len - 1) % len;
        }
    }

    pub fn select_swatch(&mut self, index: usize) {
        if index < self.palette.len() {
            self.selected_swatch = index;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.cycle(true);
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.cycle(false);
    }

    pub fn set_focus(&mut self, focus: GeneratorFocus) {
        self.focus = focus;
    }

    /// Show the copied checkmark on `index` from `now` on.
    pub fn mark_copied(&mut self, index: usize, now: Instant) {
        self.copied = Some(CopiedSwatch { index, at: now });
    }

    pub fn clear_copied(&mut self) {
        self.copied = None;
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied.is_some_and(|copied| copied.index == index)
    }

    pub fn has_copied_indicator(&self) -> bool {
        self.copied.is_some()
    }

    /// Drop the copied checkmark once it has been visible long enough.
    /// Returns whether anything changed.
    pub fn expire_copied(&mut self, now: Instant) -> bool {
        match self.copied {
            Some(copied) if now.saturating_duration_since(copied.at) >= TOAST_DURATION => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    pub fn set_swatch_areas(&mut self, areas: Vec<Rect>) {
        self.swatch_areas = areas;
    }

    pub fn swatch_at(&self, position: Position) -> Option<usize> {
        self.swatch_areas.iter().position(|area| area.contains(position))
    }
}

fn is_complete_hex(text: &str) -> bool {
    text.starts_with('#') && text.chars().count() == 7
}

fn cycle_in<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let index = all.iter().position(|item| *item == current).unwrap_or(0);
    let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
    all[next]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;

    use super::*;

    fn state_with(base: Option<&str>, seed: u64) -> GeneratorState {
        let config = GeneratorConfig {
            base: base.map(str::to_string),
            seed: Some(seed),
            ..GeneratorConfig::default()
        };
        GeneratorState::new(&config, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn starts_from_configured_base() {
        let state = state_with(Some("#3498DB"), 1);
        assert_eq!(state.base_color().hex(), "#3498db");
        assert_eq!(state.hex_input().input(), "#3498db");
        assert_eq!(state.palette().len(), 5);
        assert_eq!(state.palette()[0], *state.base_color());
    }

    #[test]
    fn invalid_configured_base_falls_back_to_seeded_random() {
        let first = state_with(Some("nonsense"), 9);
        let second = state_with(None, 9);
        assert_eq!(first.base_color(), second.base_color());
        assert_eq!(first.palette(), second.palette());
    }

    #[test]
    fn invalid_hex_input_keeps_previous_base() {
        let mut state = state_with(Some("#3498db"), 1);
        let before = state.palette().to_vec();

        assert!(!state.set_hex_input("xyz123"));
        assert!(!state.set_hex_input("#xyz123"));
        assert!(!state.set_hex_input("#ff00"));
        assert_eq!(state.base_color().hex(), "#3498db");
        assert_eq!(state.palette(), before.as_slice());
        assert_eq!(state.hex_input().input(), "#ff00");
        assert!(!state.hex_input_is_valid());
    }

    #[test]
    fn complete_hex_input_replaces_base_and_regenerates() {
        let mut state = state_with(Some("#3498db"), 1);
        assert!(state.set_hex_input("#FF0000"));
        assert_eq!(state.base_color().hex(), "#ff0000");
        assert_eq!(state.palette()[0].hex(), "#ff0000");
        assert!(state.hex_input_is_valid());
    }

    #[test]
    fn typing_completes_the_base_color() {
        let mut state = state_with(Some("#3498db"), 1);
        state.set_hex_input("#00ff0");
        assert!(state.edit_hex_input(|input| input.insert_char('0')));
        assert_eq!(state.base_color().hex(), "#00ff00");
        assert!(!state.edit_hex_input(|input| input.backspace()));
        assert_eq!(state.base_color().hex(), "#00ff00");
    }

    #[test]
    fn count_is_clamped() {
        let mut state = state_with(Some("#3498db"), 1);
        state.set_count(20);
        assert_eq!(state.count(), MAX_COLORS);
        assert_eq!(state.palette().len(), MAX_COLORS);
        state.set_count(0);
        assert_eq!(state.count(), MIN_COLORS);
        state.adjust_count(1);
        assert_eq!(state.count(), 4);
        state.adjust_count(-10);
        assert_eq!(state.count(), MIN_COLORS);
        assert_eq!(state.palette().len(), MIN_COLORS);
    }

    #[test]
    fn saved_palettes_are_snapshots() {
        let mut state = state_with(Some("#3498db"), 1);
        let original = state.palette().to_vec();
        assert_eq!(state.save_palette(), 1);
        state.set_harmony(HarmonyType::Monochromatic);
        state.randomize_base();
        assert_eq!(state.save_palette(), 2);

        assert_eq!(state.saved()[0].colors, original);
        assert_eq!(state.saved()[0].ordinal, 1);
        assert_eq!(state.saved()[1].ordinal, 2);
        assert_eq!(state.saved()[1].colors, state.palette());
    }

    #[test]
    fn format_changes_do_not_regenerate() {
        let mut state = state_with(None, 3);
        state.set_harmony(HarmonyType::Random);
        let palette = state.palette().to_vec();
        state.cycle_format(true);
        assert_eq!(state.format(), ColorFormat::Rgb);
        state.set_format(ColorFormat::Hsl);
        assert_eq!(state.palette(), palette.as_slice());
    }

    #[test]
    fn harmony_cycle_wraps() {
        let mut state = state_with(Some("#3498db"), 1);
        assert_eq!(state.harmony(), HarmonyType::Analogous);
        state.cycle_harmony(false);
        assert_eq!(state.harmony(), HarmonyType::Random);
        state.cycle_harmony(true);
        assert_eq!(state.harmony(), HarmonyType::Analogous);
        state.cycle_harmony(true);
        assert_eq!(state.harmony(), HarmonyType::Complementary);
        assert_eq!(state.palette()[1].hsl().h, 24);
    }

    #[test]
    fn selection_wraps_and_formats_the_value() {
        let mut state = state_with(Some("#ff0000"), 1);
        state.set_harmony(HarmonyType::Complementary);
        state.set_format(ColorFormat::Rgb);
        assert_eq!(state.selected_value().as_deref(), Some("rgb(255, 0, 0)"));
        state.select_previous_swatch();
        assert_eq!(state.selected_swatch(), 4);
        state.select_next_swatch();
        state.select_next_swatch();
        assert_eq!(state.selected_swatch(), 1);
        assert_eq!(state.selected_value().as_deref(), Some("rgb(0, 255, 255)"));
    }

    #[test]
    fn shrinking_the_palette_keeps_selection_in_range() {
        let mut state = state_with(Some("#3498db"), 1);
        state.set_count(8);
        state.select_swatch(7);
        state.set_count(3);
        assert_eq!(state.selected_swatch(), 2);
    }

    #[test]
    fn copied_indicator_expires() {
        let mut state = state_with(Some("#3498db"), 1);
        let now = Instant::now();
        state.mark_copied(2, now);
        assert!(state.is_copied(2));
        assert!(!state.is_copied(1));
        assert!(!state.expire_copied(now + Duration::from_millis(500)));
        assert!(state.expire_copied(now + TOAST_DURATION));
        assert!(!state.has_copied_indicator());
    }

    #[test]
    fn focus_cycles_through_controls() {
        let mut state = state_with(None, 1);
        assert_eq!(state.focus(), GeneratorFocus::BaseColor);
        state.focus_previous();
        assert_eq!(state.focus(), GeneratorFocus::Swatches);
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus(), GeneratorFocus::Format);
    }

    #[test]
    fn swatch_hit_testing_uses_rendered_areas() {
        let mut state = state_with(None, 1);
        state.set_swatch_areas(vec![Rect::new(0, 0, 10, 5), Rect::new(10, 0, 10, 5)]);
        assert_eq!(state.swatch_at(Position::new(12, 3)), Some(1));
        assert_eq!(state.swatch_at(Position::new(30, 3)), None);
    }
}
