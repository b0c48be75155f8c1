use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use hueforge_types::{Effect, Modal, Msg, Route, ToastLevel};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Clear, Paragraph},
};

use super::components::{Component, GeneratorComponent, HelpComponent, SavedComponent, generator::GeneratorFocus};
use super::theme::theme_helpers as th;
use super::utils::centered_rect;
use crate::app::App;

/// Computes a modal's area from the full screen area.
pub struct ModalLayout(Box<dyn Fn(Rect) -> Rect>);

type ModalView = (Box<dyn Component>, ModalLayout);

/// Root component: tab bar, routed content view, status line, hints and the
/// optional modal on top.
pub struct MainView {
    /// Current main view component
    pub content_view: Option<Box<dyn Component>>,
    /// Currently open modal component
    pub modal_view: Option<ModalView>,
}

impl MainView {
    pub fn new(route: Route) -> Self {
        Self {
            content_view: Some(view_for(route)),
            modal_view: None,
        }
    }

    /// Swap the content view for `route`. Use `Effect::SwitchTo` rather than
    /// calling this from components.
    pub fn set_current_route(&mut self, app: &mut App, route: Route) {
        app.current_route = route;
        self.content_view = Some(view_for(route));
        app.mark_dirty();
    }

    /// Update the open modal kind (use None to clear).
    pub fn set_open_modal_kind(&mut self, app: &mut App, modal: Option<Modal>) {
        self.modal_view = modal.map(|kind| match kind {
            Modal::Help => (
                Box::new(HelpComponent) as Box<dyn Component>,
                ModalLayout(Box::new(|rect| centered_rect(70, 80, rect))),
            ),
        });
        app.open_modal = modal;
        app.mark_dirty();
    }
}

fn view_for(route: Route) -> Box<dyn Component> {
    match route {
        Route::Generator => Box::new(GeneratorComponent),
        Route::Saved => Box::new(SavedComponent),
    }
}

/// Whether `key` is text for the base color entry rather than a shortcut.
fn is_hex_entry_key(app: &App, key: &KeyEvent) -> bool {
    app.current_route == Route::Generator
        && app.generator.focus() == GeneratorFocus::BaseColor
        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        && matches!(key.code, KeyCode::Char(ch) if ch == '#' || ch.is_ascii_hexdigit())
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        let target = match self.modal_view.as_mut() {
            Some((modal, _)) => Some(modal),
            None => self.content_view.as_mut(),
        };
        if let Some(component) = target {
            effects.extend(component.handle_message(app, msg));
        }
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::Quit];
        }

        if let Some((modal, _)) = self.modal_view.as_mut() {
            return modal.handle_key_events(app, key);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => return vec![Effect::SwitchTo(app.current_route.cycle(false))],
                KeyCode::Right => return vec![Effect::SwitchTo(app.current_route.cycle(true))],
                _ => {}
            }
        }

        if !is_hex_entry_key(app, &key) {
            match key.code {
                KeyCode::Char('q') => return vec![Effect::Quit],
                KeyCode::Char('?') => return vec![Effect::ShowModal(Modal::Help)],
                KeyCode::Char('1') => return vec![Effect::SwitchTo(Route::Generator)],
                KeyCode::Char('2') => return vec![Effect::SwitchTo(Route::Saved)],
                _ => {}
            }
        }

        match self.content_view.as_mut() {
            Some(content) => content.handle_key_events(app, key),
            None => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if self.modal_view.is_some() {
            return Vec::new();
        }
        self.content_view
            .as_mut()
            .map(|content| content.handle_mouse_events(app, mouse))
            .unwrap_or_default()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the theme's background color for consistency
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        render_tab_bar(frame, layout[0], app);

        if let Some(current) = self.content_view.as_mut() {
            current.render(frame, layout[1], app);
        }

        render_status_line(frame, layout[2], app);

        let hint_spans = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, layout[3]);

        if let Some((modal, position)) = self.modal_view.as_mut() {
            render_overlay(frame, app);
            let modal_area = (position.0)(area);
            frame.render_widget(Clear, modal_area);

            let modal_hints = modal.get_hint_spans(app);
            if modal_hints.is_empty() {
                modal.render(frame, modal_area, app);
            } else {
                let splits = Layout::vertical([
                    Constraint::Percentage(100), // Modal body
                    Constraint::Length(1),       // Modal hints bar
                ])
                .split(modal_area);
                let hints_widget = Paragraph::new(Line::from(modal_hints))
                    .style(app.ctx.theme.text_muted_style())
                    .bg(app.ctx.theme.roles().background);
                frame.render_widget(hints_widget, splits[1]);
                modal.render(frame, splits[0], app);
            }
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut hint_spans = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        if let Some(content) = self.content_view.as_ref() {
            hint_spans.extend(content.get_hint_spans(app));
        }
        hint_spans.extend(th::build_hint_spans(
            &*app.ctx.theme,
            &[("1/2", " Tabs  "), ("?", " Help  "), ("q", " Quit")],
        ));
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(1), // Tab bar
            Constraint::Min(1),    // Routed view
            Constraint::Length(1), // Status / toast line
            Constraint::Length(1), // Hints bar
        ])
        .split(area)
        .to_vec()
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &*app.ctx.theme;
    let [brand_area, tabs_area] = Layout::horizontal([Constraint::Length(10), Constraint::Fill(1)]).areas(area);
    frame.render_widget(Paragraph::new(Span::styled(" hueforge", theme.accent_emphasis_style())), brand_area);

    let titles = Route::ALL
        .iter()
        .enumerate()
        .map(|(index, route)| Span::raw(format!("{} {}", index + 1, route.title())))
        .collect();
    frame.render_widget(th::tabs(theme, titles, app.current_route.index()), tabs_area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &*app.ctx.theme;
    let line = match app.toast() {
        Some(toast) => {
            let icon = match toast.level {
                ToastLevel::Success => "✔ ",
                ToastLevel::Error => "✖ ",
            };
            let style = theme.toast_style(toast.level);
            Line::from(vec![
                Span::styled(icon, style),
                Span::styled(toast.message.clone(), style.add_modifier(Modifier::BOLD)),
            ])
        }
        None => {
            let generator = &app.generator;
            Line::styled(
                format!(
                    "Base {}  {}  {} colors  {}  {} saved",
                    generator.base_color().hex(),
                    generator.harmony().label(),
                    generator.count(),
                    generator.format().label(),
                    generator.saved().len()
                ),
                theme.text_muted_style(),
            )
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Dims everything behind an open modal.
fn render_overlay(frame: &mut Frame, app: &App) {
    frame.render_widget(Block::default().style(app.ctx.theme.modal_background_style()).dim(), frame.area());
}
