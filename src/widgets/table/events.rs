//! Event handling for the data table.
//!
//! Handlers take the same `area` the table was rendered into, translate the
//! interaction into table geometry (header row, checkbox cell, data rows in
//! view order) and return the resulting [`TableEvent`], if any. All handling
//! is synchronous; state transitions are atomic per interaction.

use ratatui::layout::Rect;

use crate::events::ClickEvent;
use crate::keybinds::{Key, KeyCombo};

use super::state::{DataTableState, TableMode};
use super::{DataTable, TableEvent, TableRow};

/// Width of the leading checkbox cell when the table is selectable.
pub(super) const CHECKBOX_WIDTH: u16 = 2;

impl<T: TableRow> DataTable<'_, T> {
    /// Handle a key press while the table is focused.
    ///
    /// Up/Down/Home/End move the keyboard cursor through the view order;
    /// Space toggles selection of the cursor row. Keys are ignored while the
    /// loading or empty placeholder is shown.
    pub fn handle_key(
        &self,
        key: &KeyCombo,
        state: &mut DataTableState<T::Id>,
    ) -> Option<TableEvent<T>> {
        if key.modifiers.ctrl || key.modifiers.alt || self.mode() != TableMode::Populated {
            return None;
        }

        let last = self.rows.len() - 1;
        match key.key {
            Key::Up => {
                state.cursor = Some(state.cursor.map_or(0, |c| c.saturating_sub(1)));
                None
            }
            Key::Down => {
                state.cursor = Some(state.cursor.map_or(0, |c| (c + 1).min(last)));
                None
            }
            Key::Home => {
                state.cursor = Some(0);
                None
            }
            Key::End => {
                state.cursor = Some(last);
                None
            }
            Key::Space => {
                let view_index = state.cursor?;
                let row_index = *self.view_order(state).get(view_index)?;
                self.toggle_select(row_index, state)
            }
            _ => None,
        }
    }

    /// Handle a mouse click, given the area the table was rendered into.
    ///
    /// A click on the header row toggles sort on the clicked column (no-op
    /// for non-sortable columns). A click on a data row moves the cursor; if
    /// it lands on the checkbox cell of a selectable table it also toggles
    /// that row's selection.
    pub fn handle_click(
        &self,
        click: &ClickEvent,
        area: Rect,
        state: &mut DataTableState<T::Id>,
    ) -> Option<TableEvent<T>> {
        if self.mode() != TableMode::Populated {
            return None;
        }
        let pos = click.position;
        if !area.contains(ratatui::layout::Position::new(pos.x, pos.y)) {
            return None;
        }
        let local_x = pos.x - area.x;
        let local_y = pos.y - area.y;

        if local_y == 0 {
            let column_index = self.column_at(local_x)?;
            return self.toggle_sort(column_index, state);
        }

        let view_index = (local_y - 1) as usize;
        let order = self.view_order(state);
        let row_index = *order.get(view_index)?;
        state.cursor = Some(view_index);

        if self.selectable && local_x < CHECKBOX_WIDTH {
            return self.toggle_select(row_index, state);
        }
        None
    }

    /// Which column covers the given local x coordinate, if any.
    fn column_at(&self, local_x: u16) -> Option<usize> {
        let mut x = if self.selectable { CHECKBOX_WIDTH } else { 0 };
        for (index, column) in self.columns.iter().enumerate() {
            if local_x >= x && local_x < x + column.width {
                return Some(index);
            }
            x += column.width;
        }
        None
    }
}
