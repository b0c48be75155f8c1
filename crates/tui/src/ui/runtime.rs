//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop over terminal input, a tick timer and Ctrl+C.
//! - Route input to `MainView` and execute the `Effect`s it returns.
//! - Render only when input arrived or `App` marked itself dirty.
//!
//! Ticking: a fast interval (100 ms) while a toast or copied checkmark is
//! waiting to expire, a slow one (5 s) otherwise.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use hueforge_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use std::time::Duration;
use tokio::{
    signal,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::app::App;
use crate::cmd;
use crate::config::GeneratorConfig;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

/// Upper bound on effect/message round trips processed for one input.
const MAX_EFFECT_ROUNDS: usize = 8;

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        // Release/repeat events arrive on some platforms; act on presses only.
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal even when the loop fails.
pub async fn run_app(config: GeneratorConfig) -> Result<()> {
    let mut app = App::new(&config);
    let mut main_view = MainView::new(app.current_route);
    debug!(
        base = app.generator.base_color().hex(),
        theme = app.ctx.active_theme.id,
        "starting palette generator"
    );

    let mut terminal = setup_terminal().context("failed to prepare the terminal")?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal).context("failed to restore the terminal")?;
    outcome
}

async fn event_loop(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut events = EventStream::new();

    // Ticking strategy: fast while transients are visible, very slow when idle.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;
    app.take_dirty();

    loop {
        let target_interval = if app.has_transients() { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        let effects = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    needs_render = true;
                    handle_input_event(app, main_view, event)
                }
                Some(Err(error)) => return Err(error).context("failed to read terminal input"),
                // Input stream closed; shut down cleanly.
                None => break,
            },

            // Periodic tick
            _ = ticker.tick() => main_view.handle_message(app, Msg::Tick),

            // Handle Ctrl+C delivered as a signal (e.g. raw mode not yet active)
            _ = signal::ctrl_c() => break,
        };

        if process_effects(app, main_view, effects) == Flow::Quit {
            break;
        }

        if needs_render | app.take_dirty() {
            render(terminal, app, main_view)?;
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Run effects until none remain: navigation and toasts are applied to the
/// view directly, everything else goes through the command layer whose
/// result messages may raise further effects.
pub(crate) fn process_effects(app: &mut App, main_view: &mut MainView, mut effects: Vec<Effect>) -> Flow {
    for _ in 0..MAX_EFFECT_ROUNDS {
        if effects.is_empty() {
            return Flow::Continue;
        }
        if effects.contains(&Effect::Quit) {
            return Flow::Quit;
        }

        handle_navigation_effects(app, main_view, &mut effects);
        let messages = cmd::run_cmds(app, cmd::from_effects(effects));
        effects = messages
            .into_iter()
            .flat_map(|msg| main_view.handle_message(app, msg))
            .collect();
    }
    if !effects.is_empty() {
        warn!(pending = effects.len(), "dropping effects after too many rounds");
    }
    Flow::Continue
}

/// Apply and remove the effects that only touch the view state.
fn handle_navigation_effects(app: &mut App, main_view: &mut MainView, effects: &mut Vec<Effect>) {
    let navigation_effects = effects
        .extract_if(.., |effect| {
            matches!(
                effect,
                Effect::SwitchTo(_) | Effect::ShowModal(_) | Effect::CloseModal | Effect::ShowToast(_)
            )
        })
        .collect::<Vec<Effect>>();

    for effect in navigation_effects {
        match effect {
            Effect::SwitchTo(route) => main_view.set_current_route(app, route),
            Effect::ShowModal(modal) => main_view.set_open_modal_kind(app, Some(modal)),
            Effect::CloseModal => main_view.set_open_modal_kind(app, None),
            Effect::ShowToast(toast) => app.show_toast(toast),
            Effect::CopyToClipboardRequested(_) | Effect::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use hueforge_types::{Modal, Route, Toast};

    use super::*;

    fn app() -> App {
        App::new(&GeneratorConfig {
            base: Some("#3498db".into()),
            seed: Some(1),
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn navigation_and_toast_effects_apply_to_view_state() {
        let mut app = app();
        let mut main_view = MainView::new(app.current_route);
        let flow = process_effects(
            &mut app,
            &mut main_view,
            vec![
                Effect::SwitchTo(Route::Saved),
                Effect::ShowModal(Modal::Help),
                Effect::ShowToast(Toast::success("Palette saved to your collection!")),
            ],
        );
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.current_route, Route::Saved);
        assert_eq!(app.open_modal, Some(Modal::Help));
        assert!(main_view.modal_view.is_some());
        assert_eq!(app.toast().map(|t| t.message.as_str()), Some("Palette saved to your collection!"));

        process_effects(&mut app, &mut main_view, vec![Effect::CloseModal]);
        assert!(app.open_modal.is_none());
        assert!(main_view.modal_view.is_none());
    }

    #[test]
    fn quit_stops_processing() {
        let mut app = app();
        let mut main_view = MainView::new(app.current_route);
        let flow = process_effects(&mut app, &mut main_view, vec![Effect::SwitchTo(Route::Saved), Effect::Quit]);
        assert_eq!(flow, Flow::Quit);
        assert_eq!(app.current_route, Route::Generator);
    }
}
