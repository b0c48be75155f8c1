//! The "Generate Palette" view: base color entry, format/harmony/count
//! controls and the live palette.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hueforge_types::{Effect, Toast};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{GeneratorFocus, GeneratorState};
use crate::app::App;
use crate::config::{MAX_COLORS, MIN_COLORS};
use crate::ui::{
    components::component::Component,
    theme::{Theme, theme_helpers as th},
    widgets::{Swatch, terminal_color},
};

pub const SAVED_TOAST: &str = "Palette saved to your collection!";

#[derive(Debug, Default)]
pub struct GeneratorComponent;

impl Component for GeneratorComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.generator.focus_next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.generator.focus_previous();
                return Vec::new();
            }
            KeyCode::Enter => return copy_selected(&mut app.generator),
            _ => {}
        }

        if app.generator.focus() == GeneratorFocus::BaseColor && handle_hex_entry(&mut app.generator, key) {
            return Vec::new();
        }

        let generator = &mut app.generator;
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match generator.focus() {
                    GeneratorFocus::Format => generator.cycle_format(forward),
                    GeneratorFocus::Harmony => generator.cycle_harmony(forward),
                    GeneratorFocus::Count => generator.adjust_count(if forward { 1 } else { -1 }),
                    GeneratorFocus::Swatches if forward => generator.select_next_swatch(),
                    GeneratorFocus::Swatches => generator.select_previous_swatch(),
                    GeneratorFocus::BaseColor => {}
                }
                Vec::new()
            }
            KeyCode::Char('r') => {
                generator.randomize_base();
                Vec::new()
            }
            KeyCode::Char('s') => {
                generator.save_palette();
                vec![Effect::ShowToast(Toast::success(SAVED_TOAST))]
            }
            KeyCode::Char('c') => copy_selected(generator),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.generator.swatch_at(Position::new(mouse.column, mouse.row)) {
            Some(index) => {
                app.generator.set_focus(GeneratorFocus::Swatches);
                app.generator.select_swatch(index);
                copy_selected(&mut app.generator)
            }
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let layout = self.get_preferred_layout(app, rect);
        let controls = Layout::horizontal([
            Constraint::Length(22), // Base color entry
            Constraint::Fill(1),    // Format
            Constraint::Fill(1),    // Harmony
            Constraint::Fill(1),    // Count
        ])
        .split(layout[0]);

        let theme = &*app.ctx.theme;
        let generator = &app.generator;
        let focus = generator.focus();

        render_base_input(frame, controls[0], theme, generator);
        render_selector(frame, controls[1], theme, "Format", generator.format().label(), focus == GeneratorFocus::Format);
        render_selector(
            frame,
            controls[2],
            theme,
            "Harmony",
            generator.harmony().label(),
            focus == GeneratorFocus::Harmony,
        );
        render_count(frame, controls[3], theme, generator.count(), focus == GeneratorFocus::Count);
        let swatch_areas = render_palette(frame, layout[1], theme, generator);

        app.generator.set_swatch_areas(swatch_areas);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        let mut hints = vec![("Tab", " Focus  "), ("←/→", " Adjust  ")];
        if app.generator.focus() != GeneratorFocus::BaseColor {
            hints.push(("c", " Copy  "));
        }
        hints.extend([("Enter", " Copy  "), ("r", " Random  "), ("s", " Save  ")]);
        th::build_hint_spans(theme, &hints)
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Controls row
            Constraint::Min(6),    // Palette
        ])
        .split(area)
        .to_vec()
    }
}

/// Copy the selected swatch in the active format and start its checkmark.
fn copy_selected(generator: &mut GeneratorState) -> Vec<Effect> {
    let Some(value) = generator.selected_value() else {
        return Vec::new();
    };
    generator.mark_copied(generator.selected_swatch(), Instant::now());
    vec![Effect::CopyToClipboardRequested(value)]
}

/// Editing keys for the base color entry. Returns whether the key was used.
fn handle_hex_entry(generator: &mut GeneratorState, key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }
    match key.code {
        KeyCode::Char(ch) if ch == '#' || ch.is_ascii_hexdigit() => {
            generator.edit_hex_input(|input| input.insert_char(ch));
        }
        KeyCode::Backspace => {
            generator.edit_hex_input(|input| input.backspace());
        }
        KeyCode::Delete => {
            generator.edit_hex_input(|input| input.delete());
        }
        KeyCode::Left => {
            generator.edit_hex_input(|input| input.move_left());
        }
        KeyCode::Right => {
            generator.edit_hex_input(|input| input.move_right());
        }
        KeyCode::Home => {
            generator.edit_hex_input(|input| input.move_home());
        }
        KeyCode::End => {
            generator.edit_hex_input(|input| input.move_end());
        }
        _ => return false,
    }
    true
}

fn render_base_input(frame: &mut Frame, area: Rect, theme: &dyn Theme, generator: &GeneratorState) {
    let focused = generator.focus() == GeneratorFocus::BaseColor;
    let block = th::block(theme, Some("Base Color"), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = generator.hex_input();
    let chip = Span::styled("  ", Style::default().bg(terminal_color(generator.base_color())));
    let text = Span::styled(
        input.input().to_string(),
        th::input_style(theme, generator.hex_input_is_valid(), focused),
    );
    frame.render_widget(Paragraph::new(Line::from(vec![chip, Span::raw(" "), text])), inner);

    if focused {
        // chip (2) + gap (1)
        let x = inner.x.saturating_add(3).saturating_add(input.cursor_column() as u16);
        if x < inner.right() {
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

fn render_selector(frame: &mut Frame, area: Rect, theme: &dyn Theme, title: &str, value: &str, focused: bool) {
    let block = th::block(theme, Some(title), focused);
    let arrows = theme.selector_arrow_style(focused);
    let line = Line::from(vec![
        Span::styled("◀ ", arrows),
        Span::styled(value.to_string(), th::selector_value_style(theme, focused)),
        Span::styled(" ▶", arrows),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), area);
}

fn render_count(frame: &mut Frame, area: Rect, theme: &dyn Theme, count: usize, focused: bool) {
    let block = th::block(theme, Some("Colors"), focused);
    let mut spans = vec![Span::styled(format!("{count} "), th::selector_value_style(theme, focused))];
    for step in MIN_COLORS..=MAX_COLORS {
        let filled = step <= count;
        spans.push(Span::styled(if filled { "■" } else { "·" }, theme.count_step_style(filled)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(block), area);
}

/// Draw one swatch per palette color. Returns the swatch areas for mouse hits.
fn render_palette(frame: &mut Frame, area: Rect, theme: &dyn Theme, generator: &GeneratorState) -> Vec<Rect> {
    let focused = generator.focus() == GeneratorFocus::Swatches;
    let title = format!("Palette ({}, {} colors)", generator.harmony().label(), generator.palette().len());
    let block = th::block(theme, Some(&title), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let palette = generator.palette();
    if palette.is_empty() {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, palette.len() as u32); palette.len()];
    let areas = Layout::horizontal(constraints).split(inner);
    for (index, (color, swatch_area)) in palette.iter().zip(areas.iter()).enumerate() {
        let swatch = Swatch::new(color, generator.format())
            .selected(focused && index == generator.selected_swatch())
            .copied(generator.is_copied(index));
        frame.render_widget(swatch, *swatch_area);
    }
    areas.to_vec()
}
