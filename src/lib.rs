//! Form input and data table widgets for [ratatui].
//!
//! formgrid provides two leaf-level, independently embeddable widgets:
//!
//! - [`InputField`](widgets::InputField) - a labeled text/password input with
//!   variants, sizes, loading/disabled/invalid states and inline clear and
//!   reveal actions. The text value is owned by the caller (controlled
//!   component); the widget only relays change intents as [`InputEvent`](widgets::InputEvent)s.
//! - [`DataTable`](widgets::DataTable) - a generic table over caller-supplied
//!   rows and column descriptors, with per-column sorting, checkbox
//!   multi-select and loading/empty placeholders.
//!
//! Both widgets implement [`ratatui::widgets::StatefulWidget`] and keep their
//! small bits of local state (password visibility, sort config, selection set)
//! in explicit state structs owned by the caller. Event handling is
//! synchronous: `handle_key`/`handle_click` mutate the state and return the
//! event the interaction produced, if any.

pub mod events;
pub mod keybinds;
pub mod theme;
pub mod validation;
pub mod widgets;

pub mod prelude {
    pub use crate::events::{ClickEvent, Modifiers, Position};
    pub use crate::keybinds::{Key, KeyCombo, KeybindError};
    pub use crate::theme::Theme;
    pub use crate::validation::{ValidationResult, Validator};
    pub use crate::widgets::{
        Alignment, Column, DataTable, DataTableState, InputEvent, InputField, InputFieldState,
        InputKind, MessageKind, Selection, Size, SortState, SortValue, TableEvent, TableMode,
        TableRow, Variant,
    };
}
