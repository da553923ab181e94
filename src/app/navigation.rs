//! Grid navigation methods
//!
//! Selection lives in `UiModel`; the column count comes from the last
//! rendered frame so up/down move by a whole row.

use crate::logic::layout::{clamp_selection, move_selection, scroll_offset, GridMove};
use crate::App;

impl App {
    pub fn move_selection(&mut self, movement: GridMove) {
        let ui = &mut self.model.ui;
        ui.selected = move_selection(ui.selected, self.model.files.len(), ui.grid_columns, movement);
        self.update_scroll();
    }

    /// Select a card by index (mouse click)
    pub fn select_card(&mut self, index: usize) {
        if index < self.model.files.len() {
            self.model.ui.selected = Some(index);
            self.update_scroll();
        }
    }

    /// Keep selection and scroll valid after the snapshot changed
    pub fn clamp_selection(&mut self) {
        let ui = &mut self.model.ui;
        ui.selected = clamp_selection(ui.selected, self.model.files.len());
        self.update_scroll();
    }

    pub(crate) fn update_scroll(&mut self) {
        let ui = &mut self.model.ui;
        ui.scroll_row = scroll_offset(ui.selected, ui.grid_columns, self.visible_rows, ui.scroll_row);
    }
}
