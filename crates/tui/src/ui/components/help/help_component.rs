//! Help modal listing key bindings and the active theme.

use crossterm::event::{KeyCode, KeyEvent};
use hueforge_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::{
    components::component::Component,
    theme::{Theme, ThemeDefinition, theme_helpers as th},
};

/// Key bindings grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "GENERATOR",
        &[
            ("Tab / Shift+Tab", "Move between base color, format, harmony, count and swatches"),
            ("←/→", "Change the focused control or move the swatch selection"),
            ("#, 0-9, a-f", "Edit the base color while its entry has focus"),
            ("Enter / c", "Copy the selected swatch in the active format"),
            ("r", "Pick a random base color"),
            ("s", "Save the current palette"),
            ("Click", "Copy a swatch"),
        ],
    ),
    ("SAVED PALETTES", &[("↑/↓", "Scroll through saved palettes")]),
    (
        "GLOBAL",
        &[
            ("1 / 2", "Generate Palette / Saved Palettes"),
            ("Ctrl+←/→", "Previous / next tab"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

#[derive(Debug, Default)]
pub struct HelpComponent;

impl Component for HelpComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => vec![Effect::CloseModal],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Help"), true);
        let inner = block.inner(rect);

        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);
        let paragraph = Paragraph::new(build_help_text(theme, app.ctx.active_theme))
            .style(theme.text_primary_style())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[("Esc", " Close ")])
    }
}

fn build_help_text(theme: &dyn Theme, active_theme: &ThemeDefinition) -> Text<'static> {
    let heading = theme.text_secondary_style().add_modifier(Modifier::BOLD);
    let key_width = SECTIONS
        .iter()
        .flat_map(|(_, bindings)| bindings.iter())
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from("")];
    for (title, bindings) in SECTIONS {
        lines.push(Line::styled(format!(" {title}:"), heading));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<key_width$}  "), theme.accent_emphasis_style()),
                Span::styled(description.to_string(), theme.text_primary_style()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let swatch = active_theme.swatch;
    lines.push(Line::styled(" THEME:", heading));
    lines.push(Line::from(vec![
        Span::styled(format!("  {} ", active_theme.label), theme.text_primary_style()),
        Span::styled("  ", Style::default().bg(swatch.background)),
        Span::styled("  ", Style::default().bg(swatch.accent)),
        Span::styled("  ", Style::default().bg(swatch.selection)),
    ]));
    lines.push(Line::styled(format!("  {}", active_theme.description), theme.text_muted_style()));
    Text::from(lines)
}
