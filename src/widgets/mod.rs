//! The formgrid widgets.

pub mod input_field;
pub mod selection;
pub mod table;

pub use input_field::{
    InputEvent, InputField, InputFieldState, InputKind, MessageKind, Size, Variant,
};
pub use selection::Selection;
pub use table::{
    Alignment, Column, DataTable, DataTableState, SortState, SortValue, TableEvent, TableMode,
    TableRow,
};
