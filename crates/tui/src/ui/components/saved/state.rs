use ratatui::widgets::ListState;

/// UI state for the saved palettes list.
#[derive(Debug, Clone, Default)]
pub struct SavedViewState {
    pub list_state: ListState,
}

impl SavedViewState {
    /// Keep the selection valid for a list of `len` rows.
    pub fn sync(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (None, _) => self.list_state.select(Some(0)),
            (Some(index), len) if index >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// Move selection to the next row, wrapping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |index| (index + 1) % len);
        self.list_state.select(Some(next));
    }

    /// Move selection to the previous row, wrapping to the end.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        };
        self.list_state.select(Some(previous));
    }
}
