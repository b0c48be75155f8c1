use std::fmt::Debug;

use hueforge_types::ToastLevel;
use ratatui::style::{Color, Modifier, Style};

/// Colors for everything around the palette: panels, controls, tabs and
/// toasts.
///
/// Palette swatches never go through roles; they always render the
/// generated color itself.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    /// Border of the control that has keyboard focus
    pub focus: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Active tab, key hints and focused selector values
    pub accent_primary: Color,
    /// `◀ ▶` arrows of a focused format or harmony selector
    pub selector_arrow: Color,
    /// Unfilled steps of the color count control
    pub control_track: Color,

    pub success: Color,
    pub error: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,

    /// Background used behind modal dialogs; darker than `background` so the
    /// modal reads as elevated.
    pub modal_bg: Color,
}

/// A named set of roles plus the style builders the views share.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if focused { roles.focus } else { roles.border })
    }

    /// Highlighted row in the saved palettes list.
    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    fn modal_background_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }

    fn toast_style(&self, level: ToastLevel) -> Style {
        let color = match level {
            ToastLevel::Success => self.roles().success,
            ToastLevel::Error => self.roles().error,
        };
        Style::default().fg(color)
    }

    fn selector_arrow_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.roles().selector_arrow).add_modifier(Modifier::BOLD)
        } else {
            self.text_muted_style()
        }
    }

    /// One step of the count control; filled up to the current count.
    fn count_step_style(&self, filled: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if filled { roles.accent_primary } else { roles.control_track })
    }

    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }
    fn accent_emphasis_style(&self) -> Style {
        self.accent_primary_style().add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{DraculaTheme, NordTheme};

    #[test]
    fn toast_levels_use_status_colors() {
        let theme = NordTheme::new();
        assert_eq!(theme.toast_style(ToastLevel::Success).fg, Some(theme.roles().success));
        assert_eq!(theme.toast_style(ToastLevel::Error).fg, Some(theme.roles().error));
    }

    #[test]
    fn count_steps_distinguish_filled_from_track() {
        let theme = DraculaTheme::new();
        assert_ne!(theme.count_step_style(true).fg, theme.count_step_style(false).fg);
        assert_eq!(theme.selector_arrow_style(false), theme.text_muted_style());
    }
}
