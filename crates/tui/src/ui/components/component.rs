//! Component system for the hueforge TUI.
//!
//! Components are self-contained UI elements that read and update the shared
//! [`App`] state, render themselves into a `Rect`, and report side effects
//! back to the runtime as [`Effect`]s instead of performing them.

use crossterm::event::{KeyEvent, MouseEvent};
use hueforge_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI component with its own event handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Events**: key and mouse input arrive through `handle_key_events` and
///    `handle_mouse_events` while the component is visible
/// 2. **Messages**: application messages (ticks, clipboard results) arrive
///    through `handle_message`
/// 3. **Rendering**: `render` draws the component; it may record layout
///    information (such as hit areas) but must not change application data
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events while this component is active.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events while this component is active.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the bottom bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }

    /// Split `area` into the regions this component draws into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
