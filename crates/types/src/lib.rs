//! Message, effect and routing types shared between the hueforge UI
//! components and the runtime that executes their side effects.

use std::time::Duration;

/// How long a toast stays visible after it is raised.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (expires toasts and copied indicators)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// The clipboard accepted the given text
    ClipboardWritten(String),
    /// The clipboard rejected a write; carries the error message
    ClipboardFailed(String),
}

/// Side effects that components request and the runtime executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the given text to the system clipboard
    CopyToClipboardRequested(String),
    /// Show a transient notification in the status line
    ShowToast(Toast),
    /// Switch the main view to another route
    SwitchTo(Route),
    /// Open a modal above the current route
    ShowModal(Modal),
    /// Close the open modal, if any
    CloseModal,
    /// Leave the application
    Quit,
}

/// Top-level views reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Generator,
    Saved,
}

impl Route {
    /// Routes in tab order.
    pub const ALL: [Route; 2] = [Route::Generator, Route::Saved];

    pub fn title(self) -> &'static str {
        match self {
            Route::Generator => "Generate Palette",
            Route::Saved => "Saved Palettes",
        }
    }

    /// Position of this route within [`Route::ALL`].
    pub fn index(self) -> usize {
        match self {
            Route::Generator => 0,
            Route::Saved => 1,
        }
    }

    /// The neighbouring route, wrapping at either end.
    pub fn cycle(self, forward: bool) -> Route {
        let len = Route::ALL.len();
        let next = if forward {
            (self.index() + 1) % len
        } else {
            (self.index() + len - 1) % len
        };
        Route::ALL[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Help,
}

/// Severity of a toast, used to pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_cycle_wraps_both_ways() {
        assert_eq!(Route::Generator.cycle(true), Route::Saved);
        assert_eq!(Route::Saved.cycle(true), Route::Generator);
        assert_eq!(Route::Generator.cycle(false), Route::Saved);
        for route in Route::ALL {
            assert_eq!(Route::ALL[route.index()], route);
        }
    }
}
