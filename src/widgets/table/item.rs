//! Column descriptors, row trait and sort values for the data table.

use std::cmp::Ordering;
use std::hash::Hash;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// Columns define the structure of the table: a unique render key, header
/// title, the row field to render (`data_index`, defaults to the key), width,
/// alignment, and whether the column is sortable. The table never mutates the
/// column list it is given.
///
/// # Examples
///
/// ```
/// use formgrid::widgets::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("id", "ID").width(6),
///     Column::new("name", "Name").width(24).sortable(),
///     Column::new("age", "Age").width(6).align(Alignment::Right).sortable(),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique key identifying this column.
    pub key: String,
    /// Header text displayed at the top.
    pub title: String,
    /// Which row field this column renders.
    pub data_index: String,
    /// Column width in terminal columns.
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column is sortable.
    pub sortable: bool,
}

impl Column {
    /// Default width when none is given.
    pub const DEFAULT_WIDTH: u16 = 16;

    /// Create a new column. `data_index` defaults to the key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            width: Self::DEFAULT_WIDTH,
            align: Alignment::Left,
            sortable: false,
        }
    }

    /// Render a different row field than the column key.
    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }

    /// Set the column width in terminal columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show a sort indicator in the header and respond to
    /// header clicks; clicking a non-sortable header is a no-op.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// A value a row exposes for sorting.
///
/// Mixed-kind columns order deterministically by kind rank
/// (Absent < Bool < Number < Text); numbers compare via `f64::total_cmp`.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// The row has no value for this field; sorts before everything else.
    Absent,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
        }
    }

    /// Total order over sort values.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

/// Trait for rows that can be displayed in a [`DataTable`](super::DataTable).
///
/// Every row must expose a unique, stable identifier; selection and row keying
/// are by this identifier only. Rows with duplicate identifiers make selection
/// behavior undefined - this is a caller-contract precondition, not something
/// the table checks.
///
/// # Example
///
/// ```
/// use formgrid::widgets::{SortValue, TableRow};
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
///     age: u32,
/// }
///
/// impl TableRow for User {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn cell(&self, data_index: &str) -> String {
///         match data_index {
///             "name" => self.name.clone(),
///             "age" => self.age.to_string(),
///             _ => String::new(),
///         }
///     }
///
///     fn sort_value(&self, data_index: &str) -> SortValue {
///         match data_index {
///             "age" => self.age.into(),
///             other => self.cell(other).into(),
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone {
    /// The identifier type for this row.
    type Id: Clone + Eq + Hash;

    /// Return the unique identifier for this row.
    fn id(&self) -> Self::Id;

    /// Render the cell text for the given row field.
    fn cell(&self, data_index: &str) -> String;

    /// The value to sort by for the given row field.
    ///
    /// Defaults to the displayed cell text, which gives lexicographic order;
    /// override for numeric fields.
    fn sort_value(&self, data_index: &str) -> SortValue {
        SortValue::Text(self.cell(data_index))
    }
}
