//! # Command Execution Layer
//!
//! Translates component [`Effect`]s into imperative commands ([`Cmd`]) and
//! executes them. This is the boundary where pure state updates meet the
//! system clipboard.
//!
//! - [`from_effects`] picks out the effects that need the outside world.
//! - [`run_cmds`] executes them and reports each outcome back as a [`Msg`],
//!   which the runtime feeds through the normal update path.

use hueforge_types::{Effect, Msg};
use tracing::debug;

use crate::app::App;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ClipboardSet(String),
}

/// Convert effects into commands. Effects handled by the runtime itself
/// (navigation, toasts, quitting) produce no command.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::CopyToClipboardRequested(text) => Some(Cmd::ClipboardSet(text)),
            Effect::ShowToast(_) | Effect::SwitchTo(_) | Effect::ShowModal(_) | Effect::CloseModal | Effect::Quit => None,
        })
        .collect()
}

/// Execute commands in order, returning one result message per command.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) -> Vec<Msg> {
    commands
        .into_iter()
        .map(|command| match command {
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text),
        })
        .collect()
}

fn execute_clipboard_set(app: &mut App, text: String) -> Msg {
    let mut clipboard = match app.ctx.clipboard.take() {
        Some(clipboard) => clipboard,
        None => match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(error) => {
                debug!(%error, "clipboard unavailable");
                return Msg::ClipboardFailed(error.to_string());
            }
        },
    };

    let outcome = match clipboard.set_text(text.clone()) {
        Ok(()) => Msg::ClipboardWritten(text),
        Err(error) => Msg::ClipboardFailed(error.to_string()),
    };
    app.ctx.clipboard = Some(clipboard);
    outcome
}

#[cfg(test)]
mod tests {
    use hueforge_types::{Modal, Route, Toast};

    use super::*;

    #[test]
    fn only_clipboard_effects_become_commands() {
        let effects = vec![
            Effect::ShowToast(Toast::success("Palette saved to your collection!")),
            Effect::CopyToClipboardRequested("#3498db".into()),
            Effect::SwitchTo(Route::Saved),
            Effect::ShowModal(Modal::Help),
            Effect::CloseModal,
            Effect::CopyToClipboardRequested("rgb(255, 0, 0)".into()),
            Effect::Quit,
        ];
        assert_eq!(
            from_effects(effects),
            vec![
                Cmd::ClipboardSet("#3498db".into()),
                Cmd::ClipboardSet("rgb(255, 0, 0)".into()),
            ]
        );
    }

    #[test]
    fn no_effects_no_commands() {
        assert!(from_effects(Vec::new()).is_empty());
    }
}
