//! Data table widget - sortable, selectable tabular data.
//!
//! The table is a pure view over caller-owned rows and column descriptors.
//! It renders one of three mutually exclusive states (loading placeholder,
//! empty placeholder, populated table) and keeps only sort config, selection
//! set and keyboard cursor in [`DataTableState`].
//!
//! Sorting never mutates the row slice: the view order is a stably sorted
//! copy of the row indices, so equal sort keys keep their input order.
//!
//! # Example
//!
//! ```
//! use formgrid::widgets::{Column, DataTable, DataTableState, TableRow};
//! # #[derive(Clone)]
//! # struct User { id: u32, name: String }
//! # impl TableRow for User {
//! #     type Id = u32;
//! #     fn id(&self) -> u32 { self.id }
//! #     fn cell(&self, _: &str) -> String { self.name.clone() }
//! # }
//!
//! let rows = vec![
//!     User { id: 1, name: "B".into() },
//!     User { id: 2, name: "A".into() },
//! ];
//! let columns = vec![Column::new("name", "Name").sortable()];
//! let mut state = DataTableState::new();
//!
//! let table = DataTable::new(&rows, &columns).selectable(true);
//! table.toggle_sort(0, &mut state);
//! let order = table.view_order(&state);
//! assert_eq!(order, vec![1, 0]); // "A" before "B"
//! ```

pub mod events;
pub mod item;
pub mod render;
mod state;

pub use item::{Alignment, Column, SortValue, TableRow};
pub use state::{DataTableState, SortState, TableMode};

use crate::theme::Theme;

/// Event produced by a table interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    /// The sort config changed (a sortable header was activated).
    SortChanged {
        /// The row field now sorted on.
        data_index: String,
        /// The new direction.
        ascending: bool,
    },
    /// The selection changed; carries all currently selected rows, resolved
    /// against the current data in input order.
    SelectionChanged(Vec<T>),
}

/// A sortable, selectable data table.
///
/// Built fresh every frame from borrowed rows and columns; all mutable state
/// lives in [`DataTableState`].
#[derive(Debug, Clone)]
pub struct DataTable<'a, T: TableRow> {
    rows: &'a [T],
    columns: &'a [Column],
    loading: bool,
    selectable: bool,
    empty_text: &'a str,
    theme: Theme,
}

impl<'a, T: TableRow> DataTable<'a, T> {
    /// Create a table over the given rows and columns.
    pub fn new(rows: &'a [T], columns: &'a [Column]) -> Self {
        Self {
            rows,
            columns,
            loading: false,
            selectable: false,
            empty_text: "No data",
            theme: Theme::dark(),
        }
    }

    /// Show the loading placeholder instead of data.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable checkbox row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Text for the empty-state placeholder.
    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    /// Use a specific theme (defaults to [`Theme::dark`]).
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Which of the three render states applies, in priority order.
    pub fn mode(&self) -> TableMode {
        if self.loading {
            TableMode::Loading
        } else if self.rows.is_empty() {
            TableMode::Empty
        } else {
            TableMode::Populated
        }
    }

    /// The display order of rows, as indices into the row slice.
    ///
    /// With no active sort this is input order. Otherwise the indices are
    /// stably sorted by the rows' sort values on the active field; the row
    /// slice itself is never touched.
    pub fn view_order(&self, state: &DataTableState<T::Id>) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if let Some(sort) = &state.sort {
            order.sort_by(|&a, &b| {
                let ord = self.rows[a]
                    .sort_value(&sort.data_index)
                    .compare(&self.rows[b].sort_value(&sort.data_index));
                if sort.ascending { ord } else { ord.reverse() }
            });
        }
        order
    }

    /// Toggle sort on the column at `column_index`.
    ///
    /// Activating the already-sorted column flips the direction; activating a
    /// different sortable column resets to ascending. Non-sortable columns
    /// and out-of-range indices are a no-op.
    pub fn toggle_sort(
        &self,
        column_index: usize,
        state: &mut DataTableState<T::Id>,
    ) -> Option<TableEvent<T>> {
        let column = self.columns.get(column_index)?;
        if !column.sortable {
            return None;
        }

        let ascending = match &state.sort {
            Some(sort) if sort.data_index == column.data_index => !sort.ascending,
            _ => true,
        };
        state.sort = Some(SortState {
            data_index: column.data_index.clone(),
            ascending,
        });
        log::debug!(
            "table sort: {} {}",
            column.data_index,
            if ascending { "ascending" } else { "descending" }
        );

        Some(TableEvent::SortChanged {
            data_index: column.data_index.clone(),
            ascending,
        })
    }

    /// Toggle selection of the row at `row_index` (an index into the row
    /// slice, not the view order).
    ///
    /// Returns the selection-changed event carrying all currently selected
    /// rows. No-op when the table is not selectable.
    pub fn toggle_select(
        &self,
        row_index: usize,
        state: &mut DataTableState<T::Id>,
    ) -> Option<TableEvent<T>> {
        if !self.selectable {
            return None;
        }
        let row = self.rows.get(row_index)?;
        let selected = state.selection.toggle(row.id());
        log::debug!(
            "table select: row {} now {}",
            row_index,
            if selected { "selected" } else { "deselected" }
        );
        Some(TableEvent::SelectionChanged(self.selected_rows(state)))
    }

    /// All currently selected rows, resolved against the current data in
    /// input order. Selected identifiers with no matching row are skipped
    /// (they stay in the set; see [`DataTableState::prune`]).
    pub fn selected_rows(&self, state: &DataTableState<T::Id>) -> Vec<T> {
        self.rows
            .iter()
            .filter(|row| state.selection.is_selected(&row.id()))
            .cloned()
            .collect()
    }
}
