//! Application state for the hueforge TUI.
//!
//! [`App`] owns the generator state, the saved-palette view state, the active
//! route and modal, and the transient toast. Components mutate it directly in
//! response to input; the runtime feeds it [`Msg`]s for everything else.

use std::time::Instant;

use hueforge_types::{Effect, Modal, Msg, Route, TOAST_DURATION, Toast};
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::ui::components::generator::GeneratorState;
use crate::ui::components::saved::SavedViewState;
use crate::ui::theme::{self, Theme, ThemeDefinition};

/// Cross-cutting context shared by every component.
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Catalog entry of the active theme
    pub active_theme: &'static ThemeDefinition,
    /// System clipboard, opened on first use and kept open afterwards
    pub clipboard: Option<arboard::Clipboard>,
}

impl SharedCtx {
    pub fn new(preferred_theme: Option<&str>) -> Self {
        let loaded = theme::load(preferred_theme);
        Self {
            theme: loaded.theme,
            active_theme: loaded.definition,
            clipboard: None,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    shown_at: Instant,
}

pub struct App {
    /// Shared, cross-cutting context (theme, clipboard)
    pub ctx: SharedCtx,
    /// Generator view state: base color, controls, palette, saved list
    pub generator: GeneratorState,
    /// Saved view state: list selection
    pub saved_view: SavedViewState,
    /// Current primary route
    pub current_route: Route,
    /// Modal open above the route, if any
    pub open_modal: Option<Modal>,
    toast: Option<ActiveToast>,
    dirty: bool,
}

impl App {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            ctx: SharedCtx::new(config.theme.as_deref()),
            generator: GeneratorState::new(config, config.rng()),
            saved_view: SavedViewState::default(),
            current_route: Route::default(),
            open_modal: None,
            toast: None,
            dirty: true,
        }
    }

    /// Apply an application message. Returns follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                if self.expire_transients(Instant::now()) {
                    self.mark_dirty();
                }
            }
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.mark_dirty();
            }
            Msg::ClipboardWritten(text) => {
                debug!(value = text.as_str(), "copied to clipboard");
                self.show_toast(Toast::success("Color copied to clipboard!"));
            }
            Msg::ClipboardFailed(error) => {
                warn!(error = error.as_str(), "clipboard write failed");
                self.generator.clear_copied();
                self.show_toast(Toast::error(format!("Could not copy color: {error}")));
            }
        }
        Vec::new()
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.show_toast_at(toast, Instant::now());
    }

    pub fn show_toast_at(&mut self, toast: Toast, now: Instant) {
        self.toast = Some(ActiveToast { toast, shown_at: now });
        self.mark_dirty();
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref().map(|active| &active.toast)
    }

    /// Whether a toast or copied indicator is waiting to expire.
    pub fn has_transients(&self) -> bool {
        self.toast.is_some() || self.generator.has_copied_indicator()
    }

    /// Expire the toast and copied indicator once `TOAST_DURATION` has passed.
    /// Returns whether anything visible changed.
    pub fn expire_transients(&mut self, now: Instant) -> bool {
        let toast_expired = self
            .toast
            .as_ref()
            .is_some_and(|active| now.saturating_duration_since(active.shown_at) >= TOAST_DURATION);
        if toast_expired {
            self.toast = None;
        }
        let copied_expired = self.generator.expire_copied(now);
        toast_expired || copied_expired
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw was requested and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
