//! Table widget state.

use std::fmt;
use std::hash::Hash;

use throbber_widgets_tui::ThrobberState;

use crate::widgets::selection::Selection;

use super::item::TableRow;

/// The active sort: which row field, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// The row field being sorted on (a column's `data_index`).
    pub data_index: String,
    /// True for ascending, false for descending.
    pub ascending: bool,
}

/// Which of the three mutually exclusive table renderings applies.
///
/// Checked in priority order: loading beats everything, then empty, then the
/// populated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    Loading,
    Empty,
    Populated,
}

/// Local state for a [`DataTable`](super::DataTable).
///
/// Holds the sort config, the selection set and the keyboard cursor. Each
/// table instance owns its own state; nothing is shared or persisted.
///
/// The selection set is keyed by row identifier, so it is unaffected by
/// re-sorting. It is deliberately *not* reconciled when the row data changes:
/// identifiers of rows that have disappeared stay selected until the caller
/// decides otherwise, e.g. via [`prune`](Self::prune).
#[derive(Clone)]
pub struct DataTableState<Id: Clone + Eq + Hash> {
    /// Current sort config, or `None` for input order.
    pub sort: Option<SortState>,
    /// Selected row identifiers.
    pub selection: Selection<Id>,
    /// Keyboard cursor as a position in the current view order.
    pub cursor: Option<usize>,
    /// Spinner state for the loading placeholder.
    pub(crate) spinner: ThrobberState,
}

impl<Id: Clone + Eq + Hash> Default for DataTableState<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Clone + Eq + Hash> DataTableState<Id> {
    /// Create a fresh state: unsorted, nothing selected.
    pub fn new() -> Self {
        Self {
            sort: None,
            selection: Selection::new(),
            cursor: None,
            spinner: ThrobberState::default(),
        }
    }

    /// Drop selected identifiers that no longer occur in `rows`.
    ///
    /// Reconciliation is opt-in; the table never calls this itself.
    pub fn prune<T: TableRow<Id = Id>>(&mut self, rows: &[T]) {
        self.selection
            .retain(|id| rows.iter().any(|row| &row.id() == id));
    }

    /// Advance the loading spinner one frame.
    ///
    /// Call this from the host's tick handler while the table is loading.
    pub fn tick(&mut self) {
        self.spinner.calc_next();
    }
}

impl<Id: Clone + Eq + Hash + fmt::Debug> fmt::Debug for DataTableState<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTableState")
            .field("sort", &self.sort)
            .field("selected", &self.selection.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
