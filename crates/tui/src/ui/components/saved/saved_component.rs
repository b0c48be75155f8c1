//! The "Saved Palettes" view: every palette saved this session, newest last.

use crossterm::event::{KeyCode, KeyEvent};
use hueforge_engine::{ColorFormat, format_color_value};
use hueforge_types::Effect;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::app::App;
use crate::ui::{
    components::{component::Component, generator::SavedPalette},
    theme::{Theme, theme_helpers as th},
    widgets::terminal_color,
};

pub const EMPTY_MESSAGE: &str = "No saved palettes yet";

#[derive(Debug, Default)]
pub struct SavedComponent;

impl Component for SavedComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let len = app.generator.saved().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.saved_view.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => app.saved_view.select_previous(len),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let saved = app.generator.saved();
        let title = format!("Saved Palettes ({})", saved.len());
        let block = th::block(theme, Some(&title), true);

        if saved.is_empty() {
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            let lines = vec![
                Line::from(""),
                Line::styled(EMPTY_MESSAGE, theme.text_secondary_style().add_modifier(Modifier::BOLD)),
                Line::styled("Press s on the generator tab to keep the current palette.", theme.text_muted_style()),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
            return;
        }

        let format = app.generator.format();
        let items: Vec<ListItem> = saved.iter().map(|palette| palette_item(theme, palette, format)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selection_style().add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        app.saved_view.sync(saved.len());
        frame.render_stateful_widget(list, rect, &mut app.saved_view.list_state);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[("↑/↓", " Scroll  ")])
    }
}

fn palette_item(theme: &dyn Theme, palette: &SavedPalette, format: ColorFormat) -> ListItem<'static> {
    let mut spans = vec![Span::styled(
        format!("Palette {:<3}", palette.ordinal),
        theme.text_primary_style().add_modifier(Modifier::BOLD),
    )];
    for color in &palette.colors {
        spans.push(Span::styled("    ", Style::default().bg(terminal_color(color))));
    }
    let values = palette
        .colors
        .iter()
        .map(|color| format_color_value(color, format))
        .collect::<Vec<_>>()
        .join("  ");
    spans.push(Span::styled(format!("  {values}"), theme.text_muted_style()));
    ListItem::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::GeneratorConfig;

    fn render_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal
            .draw(|frame| SavedComponent.render(frame, frame.area(), app))
            .unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn empty_state_message() {
        let mut app = App::new(&GeneratorConfig::default());
        assert!(render_text(&mut app).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn lists_saved_palettes_with_values() {
        let mut app = App::new(&GeneratorConfig {
            base: Some("#3498db".into()),
            count: 3,
            ..GeneratorConfig::default()
        });
        app.generator.save_palette();
        app.generator.save_palette();

        let text = render_text(&mut app);
        assert!(text.contains("Saved Palettes (2)"));
        assert!(text.contains("Palette 1"));
        assert!(text.contains("Palette 2"));
        assert!(text.contains("#3498db"));
        assert_eq!(app.saved_view.list_state.selected(), Some(0));

        SavedComponent.handle_key_events(&mut app, KeyEvent::from(KeyCode::Down));
        assert_eq!(app.saved_view.list_state.selected(), Some(1));
    }
}
